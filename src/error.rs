//! Error types for mariposa operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in mariposa operations.
///
/// An absent drawing surface at frame time is deliberately *not* an error:
/// the animation driver skips the frame and keeps scheduling.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a framebuffer or canvas.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Too few curve samples to form a closed outline.
    #[error("Curve requires at least 3 samples, got {count}")]
    SampleCount {
        /// Requested sample count.
        count: usize,
    },

    /// Curve scale factor is zero, negative, or not finite.
    #[error("Invalid curve scale: {scale}")]
    InvalidScale {
        /// Offending scale value.
        scale: f32,
    },
}
