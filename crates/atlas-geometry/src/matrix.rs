//! Fixed-dimension row-major matrices.
//!
//! All construction paths validate shape up front: a [`Matrix`] in hand is
//! guaranteed rectangular with at least one row and one column. Rotations,
//! homogeneous transforms, and diagonal covariance/noise matrices in the
//! configuration tables are all built through these constructors.

use atlas_types::AtlasError;
use serde::{Deserialize, Serialize};

/// An R×C matrix of `f64` values, stored row-major.
///
/// Immutable once built. Invariant: there are exactly `rows` rows and every
/// row has exactly `cols` elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    values: Vec<Vec<f64>>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Build a matrix from an ordered sequence of rows.
    ///
    /// Dimensions are derived from the input: `rows × rows[0].len()`.
    ///
    /// # Errors
    ///
    /// Returns [`AtlasError::InvalidDimension`] if `values` is empty, any
    /// row is empty, or the rows are ragged.
    pub fn from_rows(values: Vec<Vec<f64>>) -> Result<Self, AtlasError> {
        let rows = values.len();
        if rows == 0 {
            return Err(AtlasError::InvalidDimension(
                "matrix input must have at least one row".to_string(),
            ));
        }
        let cols = values[0].len();
        if cols == 0 {
            return Err(AtlasError::InvalidDimension(
                "matrix rows must be non-empty".to_string(),
            ));
        }
        for (i, row) in values.iter().enumerate() {
            if row.len() != cols {
                return Err(AtlasError::InvalidDimension(format!(
                    "ragged matrix: row 0 has {} elements but row {} has {}",
                    cols,
                    i,
                    row.len()
                )));
            }
        }
        Ok(Self { values, rows, cols })
    }

    /// Build an N×N matrix with `diagonal` on the main diagonal and zero
    /// elsewhere.
    ///
    /// # Errors
    ///
    /// Returns [`AtlasError::InvalidDimension`] if `diagonal` is empty.
    pub fn from_diagonal(diagonal: &[f64]) -> Result<Self, AtlasError> {
        let size = diagonal.len();
        if size == 0 {
            return Err(AtlasError::InvalidDimension(
                "diagonal input must be non-empty".to_string(),
            ));
        }
        let values = (0..size)
            .map(|i| {
                (0..size)
                    .map(|j| if i == j { diagonal[i] } else { 0.0 })
                    .collect()
            })
            .collect();
        Ok(Self {
            values,
            rows: size,
            cols: size,
        })
    }

    /// The N×N identity matrix.
    ///
    /// # Errors
    ///
    /// Returns [`AtlasError::InvalidDimension`] if `size` is zero.
    pub fn identity(size: usize) -> Result<Self, AtlasError> {
        Self::from_diagonal(&vec![1.0; size])
    }

    /// Build the 3×3 rotation matrix for a right-handed rotation of
    /// `yaw_degrees` about the vertical (Z) axis.
    ///
    /// ```text
    /// [cos θ  -sin θ  0]
    /// [sin θ   cos θ  0]
    /// [0       0      1]
    /// ```
    pub fn rotation_from_yaw_degrees(yaw_degrees: f64) -> Self {
        let yaw = yaw_degrees.to_radians();
        let (sin, cos) = yaw.sin_cos();
        Self::from_rows_unchecked(vec![
            vec![cos, -sin, 0.0],
            vec![sin, cos, 0.0],
            vec![0.0, 0.0, 1.0],
        ])
    }

    /// Internal constructor for rows already known to be rectangular and
    /// non-empty.
    pub(crate) fn from_rows_unchecked(values: Vec<Vec<f64>>) -> Self {
        let rows = values.len();
        let cols = values[0].len();
        Self { values, rows, cols }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Element at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Row at `index` as a slice, or `None` when out of range.
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.values.get(index).map(Vec::as_slice)
    }

    /// All rows.
    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// The transposed C×R matrix.
    pub fn transpose(&self) -> Matrix {
        let values = (0..self.cols)
            .map(|j| (0..self.rows).map(|i| self.values[i][j]).collect())
            .collect();
        Self::from_rows_unchecked(values)
    }

    /// Matrix product `self · rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`AtlasError::InvalidDimension`] when `self.cols() !=
    /// rhs.rows()`.
    pub fn matmul(&self, rhs: &Matrix) -> Result<Matrix, AtlasError> {
        if self.cols != rhs.rows {
            return Err(AtlasError::InvalidDimension(format!(
                "cannot multiply {}x{} by {}x{}",
                self.rows, self.cols, rhs.rows, rhs.cols
            )));
        }
        let values = (0..self.rows)
            .map(|i| {
                (0..rhs.cols)
                    .map(|j| {
                        (0..self.cols)
                            .map(|k| self.values[i][k] * rhs.values[k][j])
                            .sum()
                    })
                    .collect()
            })
            .collect();
        Ok(Self::from_rows_unchecked(values))
    }
}

impl std::ops::Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.values[row][col]
    }
}
