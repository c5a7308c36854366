use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Workspace-wide error type for configuration-time construction failures.
///
/// Every error here is unrecoverable at the point it occurs: a wrong-shape
/// matrix or an unreadable map must abort configuration assembly rather than
/// flow downstream, where it would silently corrupt pose estimates.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AtlasError {
    /// Input to a vector/matrix/grid constructor was empty, ragged, or did
    /// not match the dimension the call site expects. Always a caller bug.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// The traversability bitmap could not be read or decoded, or had zero
    /// extent. Raised once at startup; never retried.
    #[error("failed to load map: {0}")]
    MapLoad(String),
}

/// Sensor classes feeding the localization engine.
///
/// Each class occupies a fixed slot in the engine's measurement tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorType {
    AprilTag,
    Odometry,
    Imu,
}

impl SensorType {
    /// Stable table index for this sensor class.
    ///
    /// Adding a variant without extending this match is a compile error.
    pub fn index(self) -> usize {
        match self {
            SensorType::AprilTag => 0,
            SensorType::Odometry => 1,
            SensorType::Imu => 2,
        }
    }
}

/// Camera hardware models the rig can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CameraType {
    Ov2311,
    Logitech,
}

impl CameraType {
    /// Stable table index for this camera model.
    pub fn index(self) -> usize {
        match self {
            CameraType::Ov2311 => 0,
            CameraType::Logitech => 1,
        }
    }
}
