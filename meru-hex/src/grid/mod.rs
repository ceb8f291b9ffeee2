//! Grid-index backends.
//!
//! The remapping engine never touches tessellation math itself; it talks to
//! a hexagonal grid index through the [`GridIndex`] trait and only converts
//! coordinates on either side of the call. Backends answer every query in
//! the grid's own fixed orientation (the native frame).
//!
//! # Backends
//!
//! - [`H3Grid`]: the [h3o](https://docs.rs/h3o) H3 implementation
//!   (cargo feature `h3`, enabled by default)
//!
//! # Example
//!
//! ```ignore
//! use meru_hex::grid::{GridIndex, H3Grid};
//!
//! let grid = H3Grid::new();
//! let cell = grid.cell_at(&point, 5)?;
//! let neighbors = grid.grid_disk(&cell, 1)?;
//! ```

#[cfg(feature = "h3")]
mod h3;

#[cfg(feature = "h3")]
pub use h3::{H3Error, H3Grid};

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::core::GeoPoint;

/// Vertex ordering of a polygon ring passed to or returned by polyfill.
///
/// H3 tooling historically reads vertex pairs as (lat, lng), while the
/// GeoJSON spec mandates (lng, lat). The order travels with the ring so
/// both sides agree on how to read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordOrder {
    /// Pairs are (latitude, longitude), H3's historical default.
    #[default]
    LatLng,
    /// Pairs are (longitude, latitude), GeoJSON position order.
    LngLat,
}

impl CoordOrder {
    /// Split a vertex pair into (lat, lng) according to this order.
    #[inline]
    pub fn lat_lng_of(&self, pair: [f64; 2]) -> (f64, f64) {
        match self {
            CoordOrder::LatLng => (pair[0], pair[1]),
            CoordOrder::LngLat => (pair[1], pair[0]),
        }
    }

    /// Pack (lat, lng) back into a vertex pair in this order.
    #[inline]
    pub fn pair_of(&self, lat: f64, lng: f64) -> [f64; 2] {
        match self {
            CoordOrder::LatLng => [lat, lng],
            CoordOrder::LngLat => [lng, lat],
        }
    }
}

/// Capability interface of a hexagonal grid index.
///
/// Everything is synchronous, CPU-bound, and answered in the backend's
/// native orientation. Cells are opaque tokens: the engine stores, hashes,
/// and passes them back but never decodes them. Errors are the backend's
/// own (bad resolution, bad cell, malformed ring) and are propagated to
/// callers unchanged.
pub trait GridIndex {
    /// Opaque cell identifier.
    type Cell: Clone + Eq + Hash + Debug;
    /// Backend error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Cell containing `point` at `resolution`.
    fn cell_at(&self, point: &GeoPoint, resolution: u8) -> Result<Self::Cell, Self::Error>;

    /// Center point of `cell`.
    fn cell_center(&self, cell: &Self::Cell) -> Result<GeoPoint, Self::Error>;

    /// Boundary vertices of `cell`, in order, without the closing repeat.
    fn cell_boundary(&self, cell: &Self::Cell) -> Result<Vec<GeoPoint>, Self::Error>;

    /// All cells within `k` grid steps of `cell`, including `cell` itself.
    fn grid_disk(&self, cell: &Self::Cell, k: u32) -> Result<HashSet<Self::Cell>, Self::Error>;

    /// Same set as [`grid_disk`](Self::grid_disk), grouped by grid distance.
    ///
    /// Index `d` of the returned vector holds the cells exactly `d` steps
    /// away, for `d` in `0..=k`.
    fn grid_disk_distances(
        &self,
        cell: &Self::Cell,
        k: u32,
    ) -> Result<Vec<HashSet<Self::Cell>>, Self::Error>;

    /// Grid distance between two cells of the same resolution.
    fn grid_distance(&self, a: &Self::Cell, b: &Self::Cell) -> Result<i32, Self::Error>;

    /// Cells covering the polygon outlined by `ring` at `resolution`.
    ///
    /// `ring` is an ordered outer boundary; vertex pairs are read per
    /// `order`. A closing repeat of the first vertex is accepted but not
    /// required.
    fn polygon_to_cells(
        &self,
        ring: &[[f64; 2]],
        resolution: u8,
        order: CoordOrder,
    ) -> Result<HashSet<Self::Cell>, Self::Error>;
}
