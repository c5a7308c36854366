//! Homogeneous transform composition.
//!
//! A homogeneous transform is a 4×4 matrix carrying a 3×3 rotation block,
//! a 3×1 translation column, and the fixed bottom row `[0, 0, 0, 1]` —
//! the affine pose representation the localization engine composes with.
//!
//! # Example
//!
//! ```rust
//! use atlas_geometry::{transform, Matrix, Vector};
//!
//! let rotation = Matrix::rotation_from_yaw_degrees(90.0);
//! let translation = Vector::from_slice(&[1.0, 2.0, 0.5]).unwrap();
//! let t = transform::transformation_matrix(&rotation, &translation).unwrap();
//!
//! assert_eq!(t.rows(), 4);
//! assert_eq!(t[(0, 3)], 1.0);
//! assert_eq!(t.row(3), Some([0.0, 0.0, 0.0, 1.0].as_slice()));
//! ```

use atlas_types::AtlasError;
use nalgebra::{Matrix3, Vector3};

use crate::matrix::Matrix;
use crate::vector::Vector;

/// World up axis in the NWU frame.
const UP: Vector3<f64> = Vector3::new(0.0, 0.0, 1.0);

/// Compose a 3×3 rotation and a 3-element translation into a 4×4
/// homogeneous transform.
///
/// The top-left 3×3 block equals `rotation`, the top-right column equals
/// `translation`, and the bottom row is exactly `[0, 0, 0, 1]`.
///
/// # Errors
///
/// Returns [`AtlasError::InvalidDimension`] if `rotation` is not 3×3 or
/// `translation` does not have 3 elements.
pub fn transformation_matrix(
    rotation: &Matrix,
    translation: &Vector,
) -> Result<Matrix, AtlasError> {
    if rotation.rows() != 3 || rotation.cols() != 3 {
        return Err(AtlasError::InvalidDimension(format!(
            "rotation block must be 3x3, got {}x{}",
            rotation.rows(),
            rotation.cols()
        )));
    }
    if translation.len() != 3 {
        return Err(AtlasError::InvalidDimension(format!(
            "translation must have 3 elements, got {}",
            translation.len()
        )));
    }

    let mut values: Vec<Vec<f64>> = (0..3)
        .map(|i| {
            vec![
                rotation[(i, 0)],
                rotation[(i, 1)],
                rotation[(i, 2)],
                translation[i],
            ]
        })
        .collect();
    values.push(vec![0.0, 0.0, 0.0, 1.0]);
    Ok(Matrix::from_rows_unchecked(values))
}

/// Build a homogeneous transform for a sensor mounted at `position` and
/// pointed along `direction`, both expressed in the robot frame.
///
/// The rotation block's columns are the sensor's forward, left, and up axes:
/// forward is `direction` normalized, up is the world Z axis, and left is
/// `up × forward`.
///
/// # Errors
///
/// Returns [`AtlasError::InvalidDimension`] if either input does not have 3
/// elements, or if `direction` is zero or parallel to the up axis (no
/// well-defined left axis exists there).
pub fn transformation_from_direction(
    position: &Vector,
    direction: &Vector,
) -> Result<Matrix, AtlasError> {
    let forward: Vector3<f64> = Vector3::try_from(direction)?;
    let norm = forward.norm();
    if norm == 0.0 {
        return Err(AtlasError::InvalidDimension(
            "direction must be non-zero".to_string(),
        ));
    }
    let forward = forward / norm;

    let left = UP.cross(&forward);
    let left_norm = left.norm();
    if left_norm < 1e-12 {
        return Err(AtlasError::InvalidDimension(
            "direction must not be parallel to the up axis".to_string(),
        ));
    }
    let left = left / left_norm;

    let rotation = Matrix::from(Matrix3::from_columns(&[forward, left, UP]));
    transformation_matrix(&rotation, position)
}
