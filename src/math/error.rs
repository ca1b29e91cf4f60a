// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpyralError {
    #[error("Insufficient points for operation: expected at least {expected}, got {actual}")]
    InsufficientPoints { expected: usize, actual: usize },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Triangulation failed: {reason}")]
    TriangulationFailed { reason: String },

    #[error("Unsupported output format for '{path}'")]
    UnsupportedFormat { path: String },

    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SpyralResult<T> = Result<T, SpyralError>;
