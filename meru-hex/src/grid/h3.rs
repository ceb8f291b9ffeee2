//! H3 backend over the [h3o](https://docs.rs/h3o) crate.

use std::collections::HashSet;

use h3o::geom::{PolyfillConfig, ToCells};
use h3o::{CellIndex, LatLng, Resolution};

use super::{CoordOrder, GridIndex};
use crate::core::GeoPoint;

/// Errors surfaced by the H3 backend.
///
/// These wrap h3o's own validation errors one-to-one; nothing is retried
/// or remapped.
#[derive(Debug, thiserror::Error)]
pub enum H3Error {
    /// Resolution outside 0..=15.
    #[error("Invalid H3 resolution: {0}")]
    Resolution(#[from] h3o::error::InvalidResolution),

    /// Coordinate h3o refused (non-finite).
    #[error("Invalid coordinate for H3: {0}")]
    LatLng(#[from] h3o::error::InvalidLatLng),

    /// Polygon ring h3o refused (too few vertices, non-finite vertex).
    #[error("Invalid polygon ring: {0}")]
    Geometry(#[from] h3o::error::InvalidGeometry),

    /// Grid distance could not be computed (mixed resolutions, cells too
    /// far apart for local IJ coordinates).
    #[error("Grid distance unavailable: {0}")]
    Distance(#[from] h3o::error::LocalIjError),
}

/// The H3 grid index.
///
/// Stateless: h3o answers every query from the cell index alone, so this
/// type only ties the crate's [`GridIndex`] vocabulary to h3o's API.
/// Cells are [`CellIndex`] values; their `Display`/`FromStr` round-trips
/// the usual 15-character hex form (`"8c2bae305336bff"`).
#[derive(Debug, Clone, Copy, Default)]
pub struct H3Grid;

impl H3Grid {
    /// Create the backend.
    pub fn new() -> Self {
        Self
    }
}

impl GridIndex for H3Grid {
    type Cell = CellIndex;
    type Error = H3Error;

    fn cell_at(&self, point: &GeoPoint, resolution: u8) -> Result<Self::Cell, Self::Error> {
        let resolution = Resolution::try_from(resolution)?;
        let coord = LatLng::from_radians(point.lat_radians(), point.lng_radians())?;
        Ok(coord.to_cell(resolution))
    }

    fn cell_center(&self, cell: &Self::Cell) -> Result<GeoPoint, Self::Error> {
        let center = LatLng::from(*cell);
        Ok(GeoPoint::from_radians_unchecked(
            center.lat_radians(),
            center.lng_radians(),
        ))
    }

    fn cell_boundary(&self, cell: &Self::Cell) -> Result<Vec<GeoPoint>, Self::Error> {
        Ok(cell
            .boundary()
            .iter()
            .map(|v| GeoPoint::from_radians_unchecked(v.lat_radians(), v.lng_radians()))
            .collect())
    }

    fn grid_disk(&self, cell: &Self::Cell, k: u32) -> Result<HashSet<Self::Cell>, Self::Error> {
        Ok(cell.grid_disk(k))
    }

    fn grid_disk_distances(
        &self,
        cell: &Self::Cell,
        k: u32,
    ) -> Result<Vec<HashSet<Self::Cell>>, Self::Error> {
        let mut rings: Vec<HashSet<Self::Cell>> = vec![HashSet::new(); k as usize + 1];
        for (neighbor, distance) in cell.grid_disk_distances::<Vec<_>>(k) {
            rings[distance as usize].insert(neighbor);
        }
        Ok(rings)
    }

    fn grid_distance(&self, a: &Self::Cell, b: &Self::Cell) -> Result<i32, Self::Error> {
        Ok(a.grid_distance(*b)?)
    }

    fn polygon_to_cells(
        &self,
        ring: &[[f64; 2]],
        resolution: u8,
        order: CoordOrder,
    ) -> Result<HashSet<Self::Cell>, Self::Error> {
        let resolution = Resolution::try_from(resolution)?;
        let exterior: Vec<geo_types::Coord<f64>> = ring
            .iter()
            .map(|&pair| {
                let (lat, lng) = order.lat_lng_of(pair);
                geo_types::Coord { x: lng, y: lat }
            })
            .collect();
        let polygon = geo_types::Polygon::new(geo_types::LineString::new(exterior), Vec::new());
        let polygon = h3o::geom::Polygon::from_degrees(polygon)?;
        Ok(polygon.to_cells(PolyfillConfig::new(resolution)).collect())
    }
}
