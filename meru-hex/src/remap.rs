//! The remapping engine.
//!
//! [`RemappedGrid`] wraps a [`GridIndex`] backend together with one active
//! [`Rotation`] (identity until configured). Point-like inputs are rotated
//! into the backend's native frame before delegation, point-like outputs
//! are rotated back into the caller's frame afterwards, and cell ids pass
//! through untouched because they are native-frame tokens either way.
//!
//! Configuration is the only mutation and takes `&mut self`; every query
//! takes `&self`. A failed configure leaves the previous rotation active.

use std::collections::HashSet;

use log::{debug, trace};

use crate::config::RemapSettings;
use crate::core::{alignment, GeoPoint, Rotation};
use crate::error::{Error, Result};
use crate::faces;
use crate::grid::{CoordOrder, GridIndex};

/// A grid index viewed through a configurable orientation.
///
/// ```ignore
/// let mut grid = RemappedGrid::new(H3Grid::new());
/// grid.configure(40.0, 116.0, 0.0)?;
/// let cell = grid.point_to_cell(40.0, 116.0, 5)?;
/// let center = grid.cell_center(&cell)?;
/// ```
#[derive(Debug, Clone)]
pub struct RemappedGrid<G> {
    grid: G,
    rotation: Rotation,
}

impl<G: GridIndex> RemappedGrid<G> {
    /// Wrap `grid` with the identity remapping (native orientation).
    pub fn new(grid: G) -> Self {
        Self {
            grid,
            rotation: Rotation::identity(),
        }
    }

    /// Wrap `grid` and configure in one step.
    pub fn with_reference(
        grid: G,
        reference_lat: f64,
        reference_lng: f64,
        azimuth_rad: f64,
    ) -> Result<Self, G::Error> {
        let mut remapped = Self::new(grid);
        remapped.configure(reference_lat, reference_lng, azimuth_rad)?;
        Ok(remapped)
    }

    /// Re-orient the grid to a reference point and azimuth.
    ///
    /// Finds the native face center nearest the reference, composes the
    /// alignment rotation, and validates it before replacing the active
    /// one. On any error (invalid reference coordinate, degenerate
    /// matrix) the previous rotation stays in effect.
    pub fn configure(
        &mut self,
        reference_lat: f64,
        reference_lng: f64,
        azimuth_rad: f64,
    ) -> Result<(), G::Error> {
        let reference = GeoPoint::new(reference_lat, reference_lng)?;
        let (face, dot) = faces::nearest_face_center_with_dot(&reference);
        let rotation = Rotation::from_matrix(alignment(&reference, &face, azimuth_rad))?;
        debug!(
            "[RemappedGrid] configure: reference=({:.4}, {:.4}) azimuth={:.4} rad, \
             face=({:.4}, {:.4}), separation={:.2} deg",
            reference_lat,
            reference_lng,
            azimuth_rad,
            face.lat(),
            face.lng(),
            dot.clamp(-1.0, 1.0).acos().to_degrees()
        );
        self.rotation = rotation;
        Ok(())
    }

    /// Configure from loaded settings.
    pub fn configure_from(&mut self, settings: &RemapSettings) -> Result<(), G::Error> {
        self.configure(
            settings.reference_lat,
            settings.reference_lng,
            settings.azimuth_rad,
        )
    }

    /// Drop the remapping and return to the native orientation.
    pub fn reset(&mut self) {
        debug!("[RemappedGrid] reset to native orientation");
        self.rotation = Rotation::identity();
    }

    /// The active rotation.
    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    /// The wrapped backend.
    pub fn grid(&self) -> &G {
        &self.grid
    }

    /// Unwrap the backend.
    pub fn into_inner(self) -> G {
        self.grid
    }

    /// Cell containing (`lat`, `lng`) degrees in the caller frame.
    pub fn point_to_cell(&self, lat: f64, lng: f64, resolution: u8) -> Result<G::Cell, G::Error> {
        let point = GeoPoint::new(lat, lng)?;
        self.grid
            .cell_at(&self.to_native(&point), resolution)
            .map_err(Error::Grid)
    }

    /// Center of `cell` in the caller frame.
    pub fn cell_center(&self, cell: &G::Cell) -> Result<GeoPoint, G::Error> {
        let center = self.grid.cell_center(cell).map_err(Error::Grid)?;
        Ok(self.to_local(&center))
    }

    /// Boundary vertices of `cell` in the caller frame, without the
    /// closing repeat.
    pub fn cell_boundary(&self, cell: &G::Cell) -> Result<Vec<GeoPoint>, G::Error> {
        let boundary = self.grid.cell_boundary(cell).map_err(Error::Grid)?;
        Ok(boundary.iter().map(|v| self.to_local(v)).collect())
    }

    /// Boundary of `cell` as a closed ring: the first vertex is repeated
    /// as the last.
    pub fn cell_polygon(&self, cell: &G::Cell) -> Result<Vec<GeoPoint>, G::Error> {
        let mut ring = self.cell_boundary(cell)?;
        if let Some(&first) = ring.first() {
            ring.push(first);
        }
        Ok(ring)
    }

    /// Cells within `k` grid steps of `cell`, including `cell` itself.
    ///
    /// Cell ids are native-frame tokens on both sides, so this delegates
    /// without any coordinate work.
    pub fn ring_cells(&self, cell: &G::Cell, k: u32) -> Result<HashSet<G::Cell>, G::Error> {
        self.grid.grid_disk(cell, k).map_err(Error::Grid)
    }

    /// Same cells as [`ring_cells`](Self::ring_cells), grouped by grid
    /// distance: index `d` holds the cells exactly `d` steps away.
    pub fn ring_cells_by_distance(
        &self,
        cell: &G::Cell,
        k: u32,
    ) -> Result<Vec<HashSet<G::Cell>>, G::Error> {
        self.grid.grid_disk_distances(cell, k).map_err(Error::Grid)
    }

    /// Grid distance between two cells of the same resolution.
    pub fn cell_distance(&self, a: &G::Cell, b: &G::Cell) -> Result<i32, G::Error> {
        self.grid.grid_distance(a, b).map_err(Error::Grid)
    }

    /// Cells covering a caller-frame polygon at `resolution`.
    ///
    /// Each vertex of `ring` is read per `order`, validated, rotated into
    /// the native frame, and re-packed in the same order before the ring
    /// and the flag are handed to the backend.
    pub fn polyfill(
        &self,
        ring: &[[f64; 2]],
        resolution: u8,
        order: CoordOrder,
    ) -> Result<HashSet<G::Cell>, G::Error> {
        trace!(
            "[RemappedGrid] polyfill: {} vertices at resolution {}",
            ring.len(),
            resolution
        );
        let mut native_ring = Vec::with_capacity(ring.len());
        for &pair in ring {
            let (lat, lng) = order.lat_lng_of(pair);
            let vertex = GeoPoint::new(lat, lng)?;
            let native = self.to_native(&vertex);
            native_ring.push(order.pair_of(native.lat(), native.lng()));
        }
        self.grid
            .polygon_to_cells(&native_ring, resolution, order)
            .map_err(Error::Grid)
    }

    /// Caller frame to native frame.
    fn to_native(&self, point: &GeoPoint) -> GeoPoint {
        self.rotation.inverse_transform_point(point)
    }

    /// Native frame to caller frame.
    fn to_local(&self, point: &GeoPoint) -> GeoPoint {
        self.rotation.transform_point(point)
    }
}
