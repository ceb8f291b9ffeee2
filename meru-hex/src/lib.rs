//! # Meru-Hex: Re-orientable Hexagonal Geo-Index
//!
//! Use an H3-style hexagonal grid as if its faces were rotated to line up
//! with any point on the sphere. Pick a reference point and an azimuth,
//! and every later lookup, boundary query, and polygon fill behaves as if
//! the grid had been built around that point instead of its fixed native
//! orientation. Useful when a region of interest should sit at the center
//! of a face rather than across an icosahedron edge.
//!
//! The grid math itself stays in the backing index ([h3o] by default);
//! this crate contributes only the orientation bookkeeping: a validated
//! rotation, built from the caller's reference and the nearest native
//! face center, applied around every delegated call.
//!
//! [h3o]: https://docs.rs/h3o
//!
//! ## Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use meru_hex::{H3Grid, RemappedGrid};
//!
//! // Re-orient the grid around Beijing, no azimuth twist.
//! let mut grid = RemappedGrid::new(H3Grid::new());
//! grid.configure(40.0, 116.0, 0.0)?;
//!
//! let cell = grid.point_to_cell(40.0, 116.0, 5)?;
//! let center = grid.cell_center(&cell)?;
//! println!("{} centered at ({:.4}, {:.4})", cell, center.lat(), center.lng());
//!
//! // Ring and distance queries work on opaque cell ids, no rotation involved.
//! let neighbors = grid.ring_cells(&cell, 1)?;
//! assert_eq!(neighbors.len(), 7);
//! # Ok(())
//! # }
//! ```
//!
//! ## Frames and Conventions
//!
//! - **Native frame**: the orientation the grid library was built
//!   against (H3's fixed icosahedron face centers).
//! - **Caller frame**: the orientation after remapping; the configured
//!   reference point plays the role of the nearest face center.
//! - Latitudes and longitudes cross the API in **degrees** (latitude in
//!   [-90, 90], longitude in [-180, 180]); azimuths are **radians**.
//!   Constructors validate eagerly, so out-of-range or non-finite input
//!   fails before any grid call.
//! - Cell identifiers are opaque backend tokens and are never rotated.
//!
//! ## Architecture
//!
//! - [`core`]: geometry kernel: [`GeoPoint`], [`Vec3`]/[`Mat3`], and the
//!   validated [`Rotation`] pair
//! - [`faces`]: H3's 20 icosahedron face centers and the nearest-face lookup
//! - [`grid`]: the [`GridIndex`] capability trait and the [`H3Grid`] backend
//! - [`remap`]: [`RemappedGrid`], the engine wrapping a backend with the
//!   active rotation
//! - [`config`]: YAML-loadable [`RemapSettings`]
//! - [`error`]: error types ([`CoordinateError`], [`RotationError`],
//!   backend passthrough)
//!
//! ## Data Flow
//!
//! ```text
//!   caller frame                                native frame
//!
//!   (lat, lng) ──► GeoPoint ──► Vec3 ──► R⁻¹ ──► GeoPoint ──► point→cell
//!                                                             k-ring, fill
//!                                                                  │
//!   GeoPoint ◄── Vec3 ◄── R ◄── GeoPoint ◄── centers, boundaries ◄─┘
//! ```
//!
//! `configure` replaces `R` (and its transpose) in one step after
//! validating orthogonality; queries only read it, so `&mut`/`&` borrows
//! give the exclusive-write, shared-read discipline for free.
//!
//! ## Cargo Features
//!
//! - `h3` *(default)*: the h3o-backed [`H3Grid`]. Disable to bring your
//!   own [`GridIndex`] backend.

pub mod config;
pub mod core;
pub mod error;
pub mod faces;
pub mod grid;
pub mod remap;

pub use config::RemapSettings;
pub use core::{GeoPoint, Mat3, Rotation, Vec3};
pub use error::{CoordinateError, Error, Result, RotationError, SettingsError};
pub use faces::{face_centers, nearest_face_center};
pub use grid::{CoordOrder, GridIndex};
#[cfg(feature = "h3")]
pub use grid::{H3Error, H3Grid};
pub use remap::RemappedGrid;
