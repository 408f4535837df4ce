//! Structured error taxonomy for the core pipeline.
//!
//! Library code returns [`PixvgError`]; the binary wraps the top-level run in
//! `anyhow::Result` the same way the teacher crate's `main.rs` does.

use thiserror::Error;

/// Errors the core pipeline can produce, one variant per taxonomy entry:
/// invalid-argument, decode-failure, invariant-violation, and I/O-failure.
#[derive(Error, Debug)]
pub enum PixvgError {
    /// Scale requested by the caller was less than 1.
    #[error("scale must be >= 1, got {0}")]
    InvalidScale(u32),

    /// An RGBA channel was outside [0, 255]. Only reachable through the
    /// constructive `Color::from_components` API — pixels decoded from an
    /// image are always valid `u8`s.
    #[error("color component {channel} out of range: {value}")]
    InvalidColorComponent { channel: &'static str, value: u32 },

    /// A coordinate fell outside the grid's declared bounds.
    #[error("coordinate ({x}, {y}) is out of bounds")]
    OutOfBounds { x: i64, y: i64 },

    /// A neighborhood probe was invoked on a grid with zero width or height.
    #[error("grid has zero width or height")]
    NotTwoDimensional,

    /// Loop extraction reached a node with no outgoing edge before returning
    /// to its origin. Indicates a bug in the edge-graph builder or a cluster
    /// bitmask that was not actually 4-connected; fatal for the file being
    /// traced.
    #[error("loop is not enclosed: traversal reached a dead end")]
    NotEnclosed,

    /// The input file could not be decoded as an image.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// A filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
