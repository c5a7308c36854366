//! Quaternion-to-rotation-matrix conversion.
//!
//! Quaternions arrive in WXYZ order, expressed in the North-West-Up (NWU)
//! right-handed world frame (X = forward, Y = left, Z = up) — the
//! convention the tag-layout tables use for landmark orientation. Input
//! need not be unit-norm: the conversion normalizes first, so the derived
//! rotation matrix is always orthonormal.

use crate::matrix::Matrix;
use serde::{Deserialize, Serialize};

/// An orientation quaternion `(w, x, y, z)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    /// Create a quaternion. Any non-zero norm is acceptable; conversion
    /// normalizes internally.
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// The identity rotation (no rotation).
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Euclidean norm of the four components.
    pub fn norm(&self) -> f64 {
        (self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// This quaternion scaled to unit norm.
    ///
    /// A zero quaternion is degenerate input; its norm is treated as 1 so
    /// that configuration loading does not divide by zero.
    pub fn normalized(&self) -> Self {
        let n = self.norm();
        let n = if n == 0.0 { 1.0 } else { n };
        Self::new(self.w / n, self.x / n, self.y / n, self.z / n)
    }

    /// Convert to the equivalent 3×3 rotation matrix.
    ///
    /// Applies the standard normalized-quaternion formula; the mapping is
    /// general and total over finite input. Scaling the input quaternion by
    /// any positive factor leaves the result unchanged.
    ///
    /// ```rust
    /// use atlas_geometry::{Matrix, Quaternion};
    ///
    /// let rot = Quaternion::identity().to_rotation_matrix();
    /// assert_eq!(rot, Matrix::identity(3).unwrap());
    /// ```
    pub fn to_rotation_matrix(&self) -> Matrix {
        let Quaternion { w, x, y, z } = self.normalized();

        let r11 = 1.0 - 2.0 * (y * y + z * z);
        let r12 = 2.0 * (x * y - w * z);
        let r13 = 2.0 * (x * z + w * y);
        let r21 = 2.0 * (x * y + w * z);
        let r22 = 1.0 - 2.0 * (x * x + z * z);
        let r23 = 2.0 * (y * z - w * x);
        let r31 = 2.0 * (x * z - w * y);
        let r32 = 2.0 * (y * z + w * x);
        let r33 = 1.0 - 2.0 * (x * x + y * y);

        Matrix::from_rows_unchecked(vec![
            vec![r11, r12, r13],
            vec![r21, r22, r23],
            vec![r31, r32, r33],
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_1_SQRT_2;

    const TOL: f64 = 1e-9;

    fn assert_close(a: &Matrix, b: &Matrix) {
        assert_eq!(a.rows(), b.rows());
        assert_eq!(a.cols(), b.cols());
        for i in 0..a.rows() {
            for j in 0..a.cols() {
                assert!(
                    (a[(i, j)] - b[(i, j)]).abs() < TOL,
                    "({i},{j}): {} vs {}",
                    a[(i, j)],
                    b[(i, j)]
                );
            }
        }
    }

    #[test]
    fn identity_quaternion_gives_identity_matrix() {
        let rot = Quaternion::new(1.0, 0.0, 0.0, 0.0).to_rotation_matrix();
        assert_close(&rot, &Matrix::identity(3).unwrap());
    }

    #[test]
    fn conversion_is_normalization_invariant() {
        let q = Quaternion::new(0.3, -0.2, 0.9, 0.1);
        let scaled = Quaternion::new(q.w * 4.2, q.x * 4.2, q.y * 4.2, q.z * 4.2);
        assert_close(&q.to_rotation_matrix(), &scaled.to_rotation_matrix());
    }

    #[test]
    fn ninety_degree_yaw_matches_yaw_builder() {
        // 90° about Z: (cos 45°, 0, 0, sin 45°)
        let q = Quaternion::new(FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2);
        assert_close(
            &q.to_rotation_matrix(),
            &Matrix::rotation_from_yaw_degrees(90.0),
        );
    }

    #[test]
    fn arbitrary_quaternion_gives_orthonormal_matrix() {
        let q = Quaternion::new(0.7, -1.3, 0.4, 2.1);
        let rot = q.to_rotation_matrix();
        let product = rot.matmul(&rot.transpose()).unwrap();
        assert_close(&product, &Matrix::identity(3).unwrap());
    }

    #[test]
    fn unnormalized_field_quaternion_is_orthonormal() {
        // Taken from a tag-layout table; already near-unit but not exact.
        let q = Quaternion::new(0.4539904997395468, 0.0, 0.0, 0.8910065241883678);
        let rot = q.to_rotation_matrix();
        let product = rot.matmul(&rot.transpose()).unwrap();
        assert_close(&product, &Matrix::identity(3).unwrap());
    }

    #[test]
    fn zero_quaternion_does_not_crash() {
        // Degenerate input: norm treated as 1, components stay zero, and the
        // formula collapses to the identity matrix.
        let rot = Quaternion::new(0.0, 0.0, 0.0, 0.0).to_rotation_matrix();
        assert_close(&rot, &Matrix::identity(3).unwrap());
    }

    #[test]
    fn pitch_only_quaternion_preserves_forward_axis_norm() {
        // 30° pitch about Y: (cos 15°, 0, sin 15°, 0)
        let q = Quaternion::new(0.9659258262890683, 0.0, 0.25881904510252074, 0.0);
        let rot = q.to_rotation_matrix();
        let col_norm: f64 = (0..3).map(|i| rot[(i, 0)] * rot[(i, 0)]).sum::<f64>().sqrt();
        assert!((col_norm - 1.0).abs() < TOL);
    }

    #[test]
    fn serialization_roundtrip() {
        let q = Quaternion::new(0.5, 0.5, -0.5, 0.5);
        let json = serde_json::to_string(&q).unwrap();
        let back: Quaternion = serde_json::from_str(&json).unwrap();
        assert_eq!(q, back);
    }
}
