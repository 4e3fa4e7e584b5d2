//! The fluent filter session.
//!
//! A [`Fuzzy`] owns one working buffer for the duration of a filter chain
//! and hands it back at the end - an explicit handle instead of shared
//! module-level state, so independent sessions can run side by side:
//!
//! ```
//! use fuzzy_rust::{ColorFilter, Fuzzy, PixelBuffer, Dimension};
//!
//! let buffer = PixelBuffer::new(Dimension::of(8, 8));
//! let mut session = Fuzzy::new(buffer);
//! session.greyscale().invert(ColorFilter::None).pixelate(2);
//! let result = session.draw();
//! # assert_eq!(result.dimension(), Dimension::of(8, 8));
//! ```
//!
//! Filter methods mutate the buffer in place and return the session for
//! chaining. Methods whose underlying pass has a structural error path
//! (the blur family, untyped kernels) return `Result`; everything else is
//! infallible by construction.

use crate::buffer::PixelBuffer;
use crate::error::FilterError;
use crate::filters::blur::{box_blur, directional_blur, Direction};
use crate::filters::color::{color_filter, invert, ColorFilter};
use crate::filters::convolve;
use crate::filters::greyscale::greyscale;
use crate::filters::pixelate::pixelate;
use crate::kernel::ConvolutionMatrix;
use crate::surface;

/// A filter session owning its working pixel buffer.
#[derive(Debug, Clone)]
pub struct Fuzzy {
    buffer: PixelBuffer,
}

impl Fuzzy {
    /// Start a session over an ingested buffer.
    pub fn new(buffer: PixelBuffer) -> Self {
        Self { buffer }
    }

    /// Start a session from flat RGBA bytes; `None` when the data does not
    /// describe a `width x height` RGBA image.
    pub fn from_rgba(width: usize, height: usize, data: Vec<u8>) -> Option<Self> {
        PixelBuffer::from_rgba(width, height, data).map(Self::new)
    }

    // ========================================================================
    // Per-pixel filters
    // ========================================================================

    /// Keep only the named color channel (see [`color_filter`]).
    pub fn color_filter(&mut self, filter: ColorFilter) -> &mut Self {
        color_filter(&mut self.buffer, filter);
        self
    }

    /// Invert all color channels except the kept one (see [`invert`]).
    pub fn invert(&mut self, keep: ColorFilter) -> &mut Self {
        invert(&mut self.buffer, keep);
        self
    }

    /// Convert to greyscale.
    pub fn greyscale(&mut self) -> &mut Self {
        greyscale(&mut self.buffer);
        self
    }

    // ========================================================================
    // Windowed filters
    // ========================================================================

    /// Pixelate with `block_size x block_size` cells.
    pub fn pixelate(&mut self, block_size: i32) -> &mut Self {
        pixelate(&mut self.buffer, block_size);
        self
    }

    /// Symmetric box blur.
    pub fn box_blur(&mut self, size: i32) -> Result<&mut Self, FilterError> {
        box_blur(&mut self.buffer, size)?;
        Ok(self)
    }

    /// Directional motion blur.
    pub fn motion_blur(&mut self, size: i32, direction: Direction) -> Result<&mut Self, FilterError> {
        directional_blur(&mut self.buffer, size, direction)?;
        Ok(self)
    }

    // ========================================================================
    // Convolution filters
    // ========================================================================

    /// Convolve with a typed 3x3 kernel.
    pub fn convolution(&mut self, matrix: &ConvolutionMatrix) -> &mut Self {
        convolve::convolution(&mut self.buffer, matrix);
        self
    }

    /// Convolve with untyped rows; fails with
    /// [`FilterError::InvalidKernel`] (buffer untouched) unless the rows
    /// form exactly a 3x3 grid.
    pub fn convolution_rows(
        &mut self,
        rows: &[Vec<f32>],
        divisor: f32,
        offset: f32,
    ) -> Result<&mut Self, FilterError> {
        let matrix = ConvolutionMatrix::from_rows(rows)?
            .with_divisor(divisor)
            .with_offset(offset);
        convolve::convolution(&mut self.buffer, &matrix);
        Ok(self)
    }

    pub fn gaussian_blur(&mut self) -> &mut Self {
        convolve::gaussian_blur(&mut self.buffer);
        self
    }

    pub fn emboss(&mut self) -> &mut Self {
        convolve::emboss(&mut self.buffer);
        self
    }

    pub fn sharpen(&mut self) -> &mut Self {
        convolve::sharpen(&mut self.buffer);
        self
    }

    pub fn edge_trace(&mut self) -> &mut Self {
        convolve::edge_trace(&mut self.buffer);
        self
    }

    /// Scale every color channel by `value` (1.0 = no change).
    pub fn luminosity(&mut self, value: f32) -> &mut Self {
        convolve::luminosity(&mut self.buffer, value);
        self
    }

    pub fn lighten(&mut self) -> &mut Self {
        convolve::lighten(&mut self.buffer);
        self
    }

    pub fn darken(&mut self) -> &mut Self {
        convolve::darken(&mut self.buffer);
        self
    }

    // ========================================================================
    // Egress
    // ========================================================================

    /// Current working state, borrowed.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// A copy of the current state, leaving the session usable.
    pub fn draw(&self) -> PixelBuffer {
        self.buffer.clone()
    }

    /// Overwrite a caller-owned buffer with the current state (the
    /// "draw back into the original surface" path).
    pub fn draw_into(&self, target: &mut PixelBuffer) {
        *target = self.buffer.clone();
    }

    /// Resampled copy of the current state. A missing dimension is derived
    /// from the aspect ratio; both missing keeps the current size.
    pub fn scale(&self, width: Option<usize>, height: Option<usize>) -> PixelBuffer {
        let target = surface::fit_dimensions(self.buffer.dimension(), width, height);
        surface::resize(&self.buffer, target)
    }

    /// End the session and hand the buffer back to the adapter.
    pub fn into_buffer(self) -> PixelBuffer {
        self.buffer
    }
}
