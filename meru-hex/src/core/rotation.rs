//! Rotation matrix builders and the validated forward/inverse pair.

use crate::core::linalg::{Mat3, Vec3};
use crate::core::point::GeoPoint;
use crate::error::RotationError;

/// Acceptance tolerance for determinant and orthogonality checks.
const ROTATION_TOLERANCE: f64 = 1e-9;

/// SO(3) rotation about the X axis.
/// ```text
/// | 1  0  0 |
/// | 0  c -s |
/// | 0  s  c |
/// ```
pub fn about_x(angle_rad: f64) -> Mat3 {
    let (s, c) = angle_rad.sin_cos();
    Mat3::from_rows([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]])
}

/// SO(3) rotation about the Z axis.
/// ```text
/// | c -s  0 |
/// | s  c  0 |
/// | 0  0  1 |
/// ```
pub fn about_z(angle_rad: f64) -> Mat3 {
    let (s, c) = angle_rad.sin_cos();
    Mat3::from_rows([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
}

/// Rodrigues rotation by `angle_rad` about the axis through `axis`.
///
/// With `K` the cross-product matrix of the axis unit vector:
/// ```text
/// R = I + sin(θ)·K + (1 - cos(θ))·K²
/// ```
pub fn axis_angle(axis: &GeoPoint, angle_rad: f64) -> Mat3 {
    let k = Mat3::cross_matrix(&axis.to_vec3());
    let (s, c) = angle_rad.sin_cos();
    let mut out = [[0.0; 3]; 3];
    let kk = k * k;
    for (row, out_row) in out.iter_mut().enumerate() {
        for (col, cell) in out_row.iter_mut().enumerate() {
            *cell = Mat3::IDENTITY.get(row, col)
                + s * k.get(row, col)
                + (1.0 - c) * kk.get(row, col);
        }
    }
    Mat3::from_rows(out)
}

/// Rotation taking the grid's native orientation to the caller's frame
/// for a chosen reference point and azimuth.
///
/// The Z then X rotations carry the nearest face center towards the
/// reference point by the longitude and latitude offsets; the axis-angle
/// rotation then spins the frame about the reference axis by `azimuth_rad`:
/// ```text
/// R = axis_angle(reference, azimuth) · Rz(lng_ref - lng_face) · Rx(lat_ref - lat_face)
/// ```
pub fn alignment(reference: &GeoPoint, face_center: &GeoPoint, azimuth_rad: f64) -> Mat3 {
    let x_angle = reference.lat_radians() - face_center.lat_radians();
    let z_angle = reference.lng_radians() - face_center.lng_radians();
    axis_angle(reference, azimuth_rad) * about_z(z_angle) * about_x(x_angle)
}

/// A validated rotation and its inverse, held side by side.
///
/// The only constructors are [`Rotation::identity`] and
/// [`Rotation::from_matrix`], which rejects any matrix that is not a
/// proper rotation. The inverse is the transpose, computed once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    forward: Mat3,
    inverse: Mat3,
}

impl Rotation {
    /// The identity rotation (native orientation unchanged).
    pub fn identity() -> Self {
        Self {
            forward: Mat3::IDENTITY,
            inverse: Mat3::IDENTITY,
        }
    }

    /// Validate `m` and pair it with its transpose.
    ///
    /// Accepts matrices with determinant 1 whose product with their own
    /// transpose is the identity, both within tolerance. The comparisons
    /// are written so a matrix containing NaN is rejected.
    pub fn from_matrix(m: Mat3) -> Result<Self, RotationError> {
        let determinant = m.determinant();
        let deviation = (m * m.transpose()).max_abs_diff(&Mat3::IDENTITY);
        let ok = (determinant - 1.0).abs() <= ROTATION_TOLERANCE && deviation <= ROTATION_TOLERANCE;
        if ok {
            Ok(Self {
                forward: m,
                inverse: m.transpose(),
            })
        } else {
            Err(RotationError {
                determinant,
                deviation,
            })
        }
    }

    /// Apply the forward rotation to a vector.
    #[inline]
    pub fn apply(&self, v: Vec3) -> Vec3 {
        self.forward * v
    }

    /// Apply the inverse rotation to a vector.
    #[inline]
    pub fn apply_inverse(&self, v: Vec3) -> Vec3 {
        self.inverse * v
    }

    /// Rotate a point from the native frame into the caller frame.
    #[inline]
    pub fn transform_point(&self, p: &GeoPoint) -> GeoPoint {
        self.apply(p.to_vec3()).to_geo()
    }

    /// Rotate a point from the caller frame back into the native frame.
    #[inline]
    pub fn inverse_transform_point(&self, p: &GeoPoint) -> GeoPoint {
        self.apply_inverse(p.to_vec3()).to_geo()
    }

    /// The forward matrix (native frame to caller frame).
    #[inline]
    pub fn forward_matrix(&self) -> &Mat3 {
        &self.forward
    }

    /// The inverse matrix (caller frame to native frame).
    #[inline]
    pub fn inverse_matrix(&self) -> &Mat3 {
        &self.inverse
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::identity()
    }
}
