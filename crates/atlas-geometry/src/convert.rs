//! Conversions between the dynamic wire types and `nalgebra`.
//!
//! The configuration tables carry [`Matrix`] and [`Vector`] because their
//! dimensions come from data; numeric consumers want `nalgebra`'s
//! statically-sized types. The dynamic→static direction is fallible and
//! dimension-checked; the static→dynamic direction always succeeds.

use atlas_types::AtlasError;
use nalgebra::{Matrix3, Matrix4, Matrix6, Vector3, Vector4, Vector5, Vector6};

use crate::matrix::Matrix;
use crate::vector::Vector;

macro_rules! impl_vector_conversions {
    ($na_type:ty, $dim:expr) => {
        impl TryFrom<&Vector> for $na_type {
            type Error = AtlasError;

            fn try_from(vector: &Vector) -> Result<Self, Self::Error> {
                if vector.len() != $dim {
                    return Err(AtlasError::InvalidDimension(format!(
                        "expected a {}-element vector, got {}",
                        $dim,
                        vector.len()
                    )));
                }
                Ok(<$na_type>::from_row_slice(vector.as_slice()))
            }
        }

        impl From<$na_type> for Vector {
            fn from(vector: $na_type) -> Self {
                Vector::from_vec_unchecked(vector.iter().copied().collect())
            }
        }
    };
}

macro_rules! impl_matrix_conversions {
    ($na_type:ty, $dim:expr) => {
        impl TryFrom<&Matrix> for $na_type {
            type Error = AtlasError;

            fn try_from(matrix: &Matrix) -> Result<Self, Self::Error> {
                if matrix.rows() != $dim || matrix.cols() != $dim {
                    return Err(AtlasError::InvalidDimension(format!(
                        "expected a {}x{} matrix, got {}x{}",
                        $dim,
                        $dim,
                        matrix.rows(),
                        matrix.cols()
                    )));
                }
                let flat: Vec<f64> = matrix.values().iter().flatten().copied().collect();
                Ok(<$na_type>::from_row_slice(&flat))
            }
        }

        impl From<$na_type> for Matrix {
            fn from(matrix: $na_type) -> Self {
                let values = matrix
                    .row_iter()
                    .map(|row| row.iter().copied().collect())
                    .collect();
                Matrix::from_rows_unchecked(values)
            }
        }
    };
}

impl_vector_conversions!(Vector3<f64>, 3);
impl_vector_conversions!(Vector4<f64>, 4);
impl_vector_conversions!(Vector5<f64>, 5);
impl_vector_conversions!(Vector6<f64>, 6);

impl_matrix_conversions!(Matrix3<f64>, 3);
impl_matrix_conversions!(Matrix4<f64>, 4);
impl_matrix_conversions!(Matrix6<f64>, 6);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix3_roundtrip() {
        let wire = Matrix::from_rows(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ])
        .unwrap();
        let fixed = Matrix3::try_from(&wire).unwrap();
        assert_eq!(fixed, Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0));
        assert_eq!(Matrix::from(fixed), wire);
    }

    #[test]
    fn matrix6_roundtrip_preserves_diagonal() {
        let wire = Matrix::from_diagonal(&[10.0, 10.0, 2.0, 2.0, 1.0, 1.0]).unwrap();
        let fixed = Matrix6::try_from(&wire).unwrap();
        for i in 0..6 {
            assert_eq!(fixed[(i, i)], wire[(i, i)]);
        }
        assert_eq!(Matrix::from(fixed), wire);
    }

    #[test]
    fn matrix_dimension_mismatch_is_rejected() {
        let wire = Matrix::identity(4).unwrap();
        let err = Matrix3::try_from(&wire).unwrap_err();
        assert!(matches!(err, AtlasError::InvalidDimension(_)));
        assert!(err.to_string().contains("expected a 3x3 matrix, got 4x4"));
    }

    #[test]
    fn vector3_roundtrip() {
        let wire = Vector::from_slice(&[1.0, 2.0, 3.0]).unwrap();
        let fixed = Vector3::try_from(&wire).unwrap();
        assert_eq!(fixed, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(Vector::from(fixed), wire);
    }

    #[test]
    fn vector5_accepts_distortion_coefficients() {
        let coeffs = [
            0.04216332435519303,
            -0.06145045363038189,
            5.072789006860842e-6,
            -0.0002106044632593869,
            0.004071613340637429,
        ];
        let wire = Vector::from_slice(&coeffs).unwrap();
        let fixed = Vector5::try_from(&wire).unwrap();
        assert_eq!(fixed.as_slice(), &coeffs);
    }

    #[test]
    fn vector_dimension_mismatch_is_rejected() {
        let wire = Vector::from_slice(&[1.0, 2.0]).unwrap();
        assert!(Vector3::try_from(&wire).is_err());
        assert!(Vector6::try_from(&wire).is_err());
    }
}
