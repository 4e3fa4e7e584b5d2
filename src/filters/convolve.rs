//! 3x3 convolution and the named kernel filters.
//!
//! For every destination pixel the nine kernel positions map to the source
//! pixels `(x - 1 + kx, y - 1 + ky)`; positions falling outside the buffer
//! are skipped (no wraparound, no border value - they contribute zero).
//! Each color channel then becomes `clamp(sum / divisor + offset, 0, 255)`
//! and alpha is forced to opaque.
//!
//! Unlike blur, convolution must never observe partially updated neighbors:
//! all destinations are computed from a read-only snapshot of the source.
//! That makes the pass order-independent, so destination rows are
//! partitioned across rayon workers - one writer per row, one shared
//! immutable source.

use ndarray::parallel::prelude::*;
use ndarray::{Array3, Axis};

use crate::buffer::{Pixel, PixelBuffer};
use crate::kernel::ConvolutionMatrix;

/// Convolve the buffer with a 3x3 kernel.
///
/// The typed [`ConvolutionMatrix`] cannot be malformed; adapter-supplied
/// untyped kernels are validated by [`ConvolutionMatrix::from_rows`] before
/// this pass runs, so a bad kernel never mutates the buffer.
pub fn convolution(buffer: &mut PixelBuffer, matrix: &ConvolutionMatrix) {
    let (height, width) = (buffer.height(), buffer.width());
    let source = buffer.data.clone();
    let mut output = Array3::<u8>::zeros((height, width, 4));

    output
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(y, mut row)| {
            for x in 0..width {
                let mut sum = [0.0f32; 3];

                for ky in 0..3 {
                    for kx in 0..3 {
                        let sy = y as isize + ky as isize - 1;
                        let sx = x as isize + kx as isize - 1;
                        if sx < 0 || sx >= width as isize || sy < 0 || sy >= height as isize {
                            continue;
                        }

                        let weight = matrix.weight(ky, kx);
                        for (c, acc) in sum.iter_mut().enumerate() {
                            *acc += weight * source[[sy as usize, sx as usize, c]] as f32;
                        }
                    }
                }

                let pixel = Pixel::from_f32(
                    sum[0] / matrix.divisor() + matrix.offset(),
                    sum[1] / matrix.divisor() + matrix.offset(),
                    sum[2] / matrix.divisor() + matrix.offset(),
                    255.0,
                );
                row[[x, 0]] = pixel.r;
                row[[x, 1]] = pixel.g;
                row[[x, 2]] = pixel.b;
                row[[x, 3]] = pixel.a;
            }
        });

    buffer.data = output;
}

// ============================================================================
// Named kernel filters
// ============================================================================

/// Gaussian-weighted 3x3 blur (divisor 16).
pub fn gaussian_blur(buffer: &mut PixelBuffer) {
    convolution(buffer, &ConvolutionMatrix::gaussian_blur());
}

/// Directional emboss.
pub fn emboss(buffer: &mut PixelBuffer) {
    convolution(buffer, &ConvolutionMatrix::emboss());
}

/// Center-heavy sharpen.
pub fn sharpen(buffer: &mut PixelBuffer) {
    convolution(buffer, &ConvolutionMatrix::sharpen());
}

/// Laplacian edge trace.
pub fn edge_trace(buffer: &mut PixelBuffer) {
    convolution(buffer, &ConvolutionMatrix::edge_trace());
}

/// Scale every color channel by `value`; 1.0 is the identity on color
/// channels, NaN falls back to 1.0.
pub fn luminosity(buffer: &mut PixelBuffer, value: f32) {
    convolution(buffer, &ConvolutionMatrix::luminosity(value));
}

/// Brighten by half (luminosity 1.5).
pub fn lighten(buffer: &mut PixelBuffer) {
    convolution(buffer, &ConvolutionMatrix::lighten());
}

/// Darken to about two thirds (luminosity 0.66).
pub fn darken(buffer: &mut PixelBuffer) {
    convolution(buffer, &ConvolutionMatrix::darken());
}
