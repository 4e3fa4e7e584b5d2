//! Convolution kernels and the named kernel catalog.
//!
//! A kernel is a fixed 3x3 grid of weights plus a divisor/offset pair
//! applied per channel as `clamp(sum / divisor + offset, 0, 255)`. Typed
//! construction cannot produce a malformed kernel; untyped rows coming from
//! an adapter go through [`ConvolutionMatrix::from_rows`], which rejects
//! anything that is not exactly 3x3 before any pixel is touched.

use crate::error::FilterError;

/// A 3x3 convolution kernel with divisor/offset normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvolutionMatrix {
    weights: [[f32; 3]; 3],
    divisor: f32,
    offset: f32,
}

impl ConvolutionMatrix {
    /// Kernel with the given weights, divisor 1 and offset 0.
    pub const fn new(weights: [[f32; 3]; 3]) -> Self {
        Self {
            weights,
            divisor: 1.0,
            offset: 0.0,
        }
    }

    /// Replace the divisor. Values below 1 and NaN fall back to 1.
    pub fn with_divisor(mut self, divisor: f32) -> Self {
        self.divisor = if divisor.is_nan() || divisor < 1.0 {
            1.0
        } else {
            divisor
        };
        self
    }

    /// Replace the offset. NaN falls back to 0.
    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = if offset.is_nan() { 0.0 } else { offset };
        self
    }

    /// Build a kernel from untyped rows, failing with
    /// [`FilterError::InvalidKernel`] unless the input is exactly 3x3.
    pub fn from_rows(rows: &[Vec<f32>]) -> Result<Self, FilterError> {
        if rows.len() != 3 || rows.iter().any(|row| row.len() != 3) {
            // report the first mismatching row width, or the uniform one
            let cols = rows
                .iter()
                .map(Vec::len)
                .find(|&len| len != 3)
                .unwrap_or_else(|| rows.first().map_or(0, Vec::len));
            return Err(FilterError::InvalidKernel {
                rows: rows.len(),
                cols,
            });
        }

        let mut weights = [[0.0f32; 3]; 3];
        for (ky, row) in rows.iter().enumerate() {
            for (kx, &weight) in row.iter().enumerate() {
                weights[ky][kx] = weight;
            }
        }
        Ok(Self::new(weights))
    }

    /// Weight at kernel position `(row, col)`.
    pub fn weight(&self, row: usize, col: usize) -> f32 {
        self.weights[row][col]
    }

    pub fn divisor(&self) -> f32 {
        self.divisor
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    // ========================================================================
    // Named kernel catalog
    // ========================================================================

    /// Laplacian edge trace.
    pub const fn edge_trace() -> Self {
        Self::new([[0.0, 1.0, 0.0], [1.0, -4.0, 1.0], [0.0, 1.0, 0.0]])
    }

    /// Directional emboss.
    pub const fn emboss() -> Self {
        Self::new([[-2.0, -1.0, 0.0], [-1.0, 1.0, 1.0], [0.0, 1.0, 2.0]])
    }

    /// Center-heavy sharpen.
    pub const fn sharpen() -> Self {
        Self::new([[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]])
    }

    /// 3x3 Gaussian approximation, normalized by its weight sum of 16.
    pub fn gaussian_blur() -> Self {
        Self::new([[1.0, 2.0, 1.0], [2.0, 4.0, 2.0], [1.0, 2.0, 1.0]]).with_divisor(16.0)
    }

    /// Center-weight-only kernel scaling every channel by `value`.
    ///
    /// 1.0 leaves the image unchanged; NaN falls back to 1.0.
    pub fn luminosity(value: f32) -> Self {
        let value = if value.is_nan() { 1.0 } else { value };
        Self::new([[0.0, 0.0, 0.0], [0.0, value, 0.0], [0.0, 0.0, 0.0]])
    }

    /// Luminosity preset brightening by half.
    pub fn lighten() -> Self {
        Self::luminosity(1.5)
    }

    /// Luminosity preset darkening to about two thirds.
    pub fn darken() -> Self {
        Self::luminosity(0.66)
    }
}
