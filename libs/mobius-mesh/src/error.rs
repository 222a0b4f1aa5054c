//! # Mesh Errors
//!
//! Error types for Mobius ring generation.
//!
//! Only structurally invalid input is rejected. Numerically degenerate but
//! well-formed shapes (an oversized corner radius, for instance) still
//! produce a mesh.

use thiserror::Error;

/// Errors that can occur while generating a ring mesh.
#[derive(Debug, Error)]
pub enum MobiusError {
    /// Shape or sweep parameters that cannot describe a ring
    #[error("Invalid shape parameters: {message}")]
    InvalidShapeParameters { message: String },

    /// Cross-sections handed to the stitcher differ in point count
    #[error("Cross-section {index} has {found} points, expected {expected}")]
    MismatchedCrossSections {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// Too many triangles
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles { count: usize, max: usize },

    /// A parameter record field that could not be parsed
    #[error("Invalid value for parameter '{key}': {value:?}")]
    InvalidParameter { key: String, value: String },

    /// Geometry selector that names none of the known shapes
    #[error("Unknown geometry type: {0:?}")]
    UnknownGeometryType(String),

    /// Parameter record JSON could not be decoded
    #[error("Parameter JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MobiusError {
    /// Creates an invalid shape parameters error.
    pub fn invalid_shape(message: impl Into<String>) -> Self {
        Self::InvalidShapeParameters {
            message: message.into(),
        }
    }

    /// Creates an invalid parameter error for a record field.
    pub fn invalid_parameter(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Result type alias for ring generation.
pub type Result<T> = std::result::Result<T, MobiusError>;
