//! Error types for keystop_export

use keystop_core::GradientError;
use thiserror::Error;

/// Errors that can occur while exporting a gradient image
#[derive(Error, Debug)]
pub enum ExportError {
    /// Sampling failed (empty stop list)
    #[error("gradient error: {0}")]
    Gradient(#[from] GradientError),

    /// PNG encoding failed
    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),

    /// PNG cannot hold a zero-sized image
    #[error("cannot encode a {width}x{height} image")]
    EmptyImage { width: u32, height: u32 },
}

/// Result type for keystop_export operations
pub type Result<T> = std::result::Result<T, ExportError>;
