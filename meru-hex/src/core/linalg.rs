//! Fixed-size vector and matrix types for sphere rotations.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A 3D vector (unit vectors on the sphere, Cartesian frame).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component (towards lat 0, lng 0)
    pub x: f64,
    /// Y component (towards lat 0, lng 90°E)
    pub y: f64,
    /// Z component (towards the north pole)
    pub z: f64,
}

impl Vec3 {
    /// Create a new vector.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(&self, other: &Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Length (magnitude).
    #[inline]
    pub fn length(&self) -> f64 {
        self.dot(self).sqrt()
    }
}

impl Default for Vec3 {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Vec3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

/// A 3×3 matrix, row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    m: [[f64; 3]; 3],
}

impl Mat3 {
    /// The identity matrix.
    pub const IDENTITY: Mat3 = Mat3 {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Create a matrix from rows.
    #[inline]
    pub fn from_rows(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    /// Element at (row, col).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.m[row][col]
    }

    /// Skew-symmetric cross-product matrix of `v`.
    ///
    /// For any vector `u`, `Mat3::cross_matrix(v) * u == v × u`.
    /// ```text
    /// K = |  0  -z   y |
    ///     |  z   0  -x |
    ///     | -y   x   0 |
    /// ```
    #[inline]
    pub fn cross_matrix(v: &Vec3) -> Mat3 {
        Mat3::from_rows([
            [0.0, -v.z, v.y],
            [v.z, 0.0, -v.x],
            [-v.y, v.x, 0.0],
        ])
    }

    /// Transposed matrix. For a rotation this is its inverse.
    #[inline]
    pub fn transpose(&self) -> Mat3 {
        let m = &self.m;
        Mat3::from_rows([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> f64 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Largest absolute elementwise difference to another matrix.
    pub fn max_abs_diff(&self, other: &Mat3) -> f64 {
        let mut max = 0.0_f64;
        for row in 0..3 {
            for col in 0..3 {
                max = max.max((self.m[row][col] - other.m[row][col]).abs());
            }
        }
        max
    }
}

impl Mul for Mat3 {
    type Output = Mat3;

    fn mul(self, other: Mat3) -> Mat3 {
        let mut out = [[0.0; 3]; 3];
        for (row, out_row) in out.iter_mut().enumerate() {
            for (col, cell) in out_row.iter_mut().enumerate() {
                *cell = self.m[row][0] * other.m[0][col]
                    + self.m[row][1] * other.m[1][col]
                    + self.m[row][2] * other.m[2][col];
            }
        }
        Mat3::from_rows(out)
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.m[0][0] * v.x + self.m[0][1] * v.y + self.m[0][2] * v.z,
            self.m[1][0] * v.x + self.m[1][1] * v.y + self.m[1][2] * v.z,
            self.m[2][0] * v.x + self.m[2][1] * v.y + self.m[2][2] * v.z,
        )
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vec3_dot_and_length() {
        let a = Vec3::new(1.0, 2.0, 2.0);
        let b = Vec3::new(2.0, 0.0, 1.0);
        assert_relative_eq!(a.dot(&b), 4.0);
        assert_relative_eq!(a.length(), 3.0);
    }

    #[test]
    fn test_vec3_ops() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(0.5, -1.0, 2.0);
        let sum = a + b;
        assert_relative_eq!(sum.x, 1.5);
        assert_relative_eq!(sum.y, 1.0);
        assert_relative_eq!(sum.z, 5.0);
        let diff = a - b;
        assert_relative_eq!(diff.y, 3.0);
        let scaled = a * 2.0;
        assert_relative_eq!(scaled.z, 6.0);
    }

    #[test]
    fn test_identity_multiply() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(Mat3::IDENTITY * m, m);
        assert_eq!(m * Mat3::IDENTITY, m);

        let v = Vec3::new(1.0, -2.0, 0.5);
        assert_eq!(Mat3::IDENTITY * v, v);
    }

    #[test]
    fn test_transpose_involution() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]]);
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn test_determinant() {
        assert_relative_eq!(Mat3::IDENTITY.determinant(), 1.0);
        let m = Mat3::from_rows([[2.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 4.0]]);
        assert_relative_eq!(m.determinant(), 24.0);
        // Singular: second row is twice the first.
        let s = Mat3::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 0.0]]);
        assert_relative_eq!(s.determinant(), 0.0);
    }

    #[test]
    fn test_cross_matrix_matches_cross_product() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let u = Vec3::new(-2.0, 0.5, 1.0);
        let cross = Vec3::new(
            v.y * u.z - v.z * u.y,
            v.z * u.x - v.x * u.z,
            v.x * u.y - v.y * u.x,
        );
        let via_matrix = Mat3::cross_matrix(&v) * u;
        assert_relative_eq!(via_matrix.x, cross.x);
        assert_relative_eq!(via_matrix.y, cross.y);
        assert_relative_eq!(via_matrix.z, cross.z);
    }

    #[test]
    fn test_cross_matrix_antisymmetric() {
        let k = Mat3::cross_matrix(&Vec3::new(0.3, -0.7, 0.2));
        let kt = k.transpose();
        for row in 0..3 {
            for col in 0..3 {
                assert_relative_eq!(k.get(row, col), -kt.get(row, col));
            }
        }
    }

    #[test]
    fn test_max_abs_diff() {
        let a = Mat3::IDENTITY;
        let mut rows = [[0.0; 3]; 3];
        rows[0][0] = 1.0;
        rows[1][1] = 1.0;
        rows[2][2] = 1.0;
        rows[1][2] = 0.25;
        let b = Mat3::from_rows(rows);
        assert_relative_eq!(a.max_abs_diff(&b), 0.25);
    }
}
