//! Error taxonomy for the filter engine.
//!
//! Only structural problems are errors: coordinates outside the buffer,
//! kernels that are not 3x3, and averaging over an empty window. Scalar
//! parameters (block sizes, blur sizes, divisors, luminosity values) never
//! fail; they clamp or fall back to a default so a filter chain keeps
//! running on bad input.

use thiserror::Error;

/// Errors surfaced by buffer access and filter application.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FilterError {
    /// Pixel coordinate access outside the buffer extent.
    #[error("pixel coordinate ({x}, {y}) is outside the {width}x{height} buffer")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Convolution kernel is not exactly 3x3. Raised before any pixel is
    /// touched, so the buffer is never left partially convolved.
    #[error("convolution kernel must be exactly 3x3, got {rows}x{cols}")]
    InvalidKernel { rows: usize, cols: usize },

    /// A pixel window contained no in-bounds pixels to average.
    #[error("cannot average an empty pixel window")]
    DivisionByZero,
}
