//! Fixed-length numeric vectors.

use atlas_types::AtlasError;
use serde::{Deserialize, Serialize};

/// An ordered, fixed-length sequence of `f64` scalars.
///
/// The length is fixed at construction and never changes; equality is
/// purely structural. Used for translations, diagonal entries, distortion
/// coefficients, and state vectors of any dimension the consumer expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    values: Vec<f64>,
}

impl Vector {
    /// Build a vector from a slice of scalars.
    ///
    /// The output length equals the input length exactly; nothing is
    /// truncated or padded.
    ///
    /// # Errors
    ///
    /// Returns [`AtlasError::InvalidDimension`] if `values` is empty.
    pub fn from_slice(values: &[f64]) -> Result<Self, AtlasError> {
        if values.is_empty() {
            return Err(AtlasError::InvalidDimension(
                "vector input must be non-empty".to_string(),
            ));
        }
        Ok(Self {
            values: values.to_vec(),
        })
    }

    /// Build a vector while enforcing an expected length at the call site.
    ///
    /// Boundary-crossing form of [`from_slice`][Self::from_slice]: callers
    /// that hand the result to a consumer with a fixed dimension (a 3-element
    /// translation, a 6-element state) pass that dimension here.
    ///
    /// # Errors
    ///
    /// Returns [`AtlasError::InvalidDimension`] if `values.len() != expected`
    /// or `values` is empty.
    pub fn from_slice_exact(values: &[f64], expected: usize) -> Result<Self, AtlasError> {
        if values.len() != expected {
            return Err(AtlasError::InvalidDimension(format!(
                "expected {} elements, got {}",
                expected,
                values.len()
            )));
        }
        Self::from_slice(values)
    }

    /// Internal constructor for values already known to be non-empty.
    pub(crate) fn from_vec_unchecked(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false` for a validly constructed vector.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Element at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// The elements as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

impl std::ops::Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice_preserves_length_and_order() {
        let v = Vector::from_slice(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(v.len(), 3);
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn from_slice_rejects_empty_input() {
        let err = Vector::from_slice(&[]).unwrap_err();
        assert!(matches!(err, AtlasError::InvalidDimension(_)));
    }

    #[test]
    fn from_slice_exact_accepts_matching_length() {
        let v = Vector::from_slice_exact(&[0.33, -0.33, 0.0], 3).unwrap();
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn from_slice_exact_rejects_mismatched_length() {
        let err = Vector::from_slice_exact(&[1.0, 2.0], 3).unwrap_err();
        assert!(matches!(err, AtlasError::InvalidDimension(_)));
        assert!(err.to_string().contains("expected 3 elements, got 2"));
    }

    #[test]
    fn from_slice_exact_rejects_empty_even_when_expected_zero() {
        let err = Vector::from_slice_exact(&[], 0).unwrap_err();
        assert!(matches!(err, AtlasError::InvalidDimension(_)));
    }

    #[test]
    fn get_and_index_agree() {
        let v = Vector::from_slice(&[4.0, 5.0]).unwrap();
        assert_eq!(v.get(1), Some(5.0));
        assert_eq!(v[1], 5.0);
        assert_eq!(v.get(2), None);
    }

    #[test]
    fn structural_equality() {
        let a = Vector::from_slice(&[1.0, 2.0]).unwrap();
        let b = Vector::from_slice(&[1.0, 2.0]).unwrap();
        let c = Vector::from_slice(&[1.0, 2.5]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn serialization_roundtrip() {
        let v = Vector::from_slice(&[1.5, -2.5, 0.0]).unwrap();
        let json = serde_json::to_string(&v).unwrap();
        let back: Vector = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}
