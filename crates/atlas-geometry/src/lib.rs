//! `atlas-geometry` – linear-algebra primitives for the localization stack.
//!
//! Everything the pose pipeline consumes as "a matrix" or "a vector" is
//! built here, with dimensional correctness enforced at construction time:
//! a consumer expecting a 6×6 noise matrix receives exactly six rows of six
//! values or configuration assembly aborts.
//!
//! # Modules
//!
//! - [`vector`] – [`Vector`]: fixed-length `f64` sequences validated on
//!   construction.
//! - [`matrix`] – [`Matrix`]: row-major matrices with rectangular-shape
//!   validation, diagonal and yaw-rotation builders.
//! - [`quaternion`] – [`Quaternion`]: normalizing quaternion-to-rotation
//!   conversion in the NWU world frame.
//! - [`transform`] – homogeneous 4×4 transform composition from a rotation
//!   block and a translation column.
//! - [`convert`] – checked conversions between the dynamic wire types and
//!   `nalgebra` statically-sized matrices and vectors.

pub mod convert;
pub mod matrix;
pub mod quaternion;
pub mod transform;
pub mod vector;

pub use matrix::Matrix;
pub use quaternion::Quaternion;
pub use vector::Vector;
