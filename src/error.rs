//! Error types for the ray tracing core.

use thiserror::Error;

/// Errors that can occur while building scenes or shading rays.
#[derive(Error, Debug)]
pub enum Error {
    /// A matrix could not be inverted.
    #[error("matrix is singular (determinant {determinant})")]
    SingularMatrix { determinant: f64 },

    /// A zero-length vector was normalized.
    #[error("cannot normalize a zero-length vector")]
    ZeroVector,

    /// A material field was assigned a value outside its valid range.
    #[error("invalid material {field}: {value}")]
    InvalidMaterial { field: &'static str, value: f64 },

    /// A shape record carried a type tag no shape answers to.
    #[error("unknown shape type `{0}`")]
    UnknownShape(String),

    /// A pattern record carried a type tag no pattern answers to.
    #[error("unknown pattern type `{0}`")]
    UnknownPattern(String),

    /// A record was well-formed JSON but described an impossible entity.
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for ray tracing operations.
pub type Result<T> = std::result::Result<T, Error>;
