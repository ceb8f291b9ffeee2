//! Core geometry layer.
//!
//! The bottom layer of the crate with no internal dependencies beyond the
//! error types. Everything else builds on these.
//!
//! # Contents
//!
//! - [`point`]: Geographic points with paired angular and Cartesian forms
//! - [`linalg`]: Fixed-size vector and matrix types
//! - [`rotation`]: Rotation builders and the validated forward/inverse pair

pub mod linalg;
pub mod point;
pub mod rotation;

pub use linalg::{Mat3, Vec3};
pub use point::GeoPoint;
pub use rotation::{about_x, about_z, alignment, axis_angle, Rotation};
