//! WebAssembly exports for the filter engine.
//!
//! These functions are exposed to JavaScript via wasm-bindgen and work on
//! flat RGBA byte slices (length `width * height * 4`, row-major), the
//! layout of canvas `ImageData`. A slice that does not describe a
//! `width x height` RGBA image - or a kernel that is not 3x3 - yields
//! `None` (JS `null`) rather than trapping.

use wasm_bindgen::prelude::*;

use crate::buffer::{Dimension, PixelBuffer};
use crate::filters::blur::Direction;
use crate::filters::color::ColorFilter;
use crate::kernel::ConvolutionMatrix;
use crate::session::Fuzzy;
use crate::surface;

fn ingest(data: &[u8], width: usize, height: usize) -> Option<Fuzzy> {
    Fuzzy::from_rgba(width, height, data.to_vec())
}

// ============================================================================
// Per-pixel filters
// ============================================================================

/// Keep only the named color channel (`"red"`, `"green"`, `"blue"`).
///
/// Unrecognized names are a no-op, matching the permissive filter contract.
#[wasm_bindgen]
pub fn color_filter_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    channel: &str,
) -> Option<Vec<u8>> {
    let mut fuzzy = ingest(data, width, height)?;
    fuzzy.color_filter(ColorFilter::parse(channel));
    Some(fuzzy.into_buffer().into_rgba())
}

/// Invert every color channel except the named one; pass anything other
/// than `"red"`/`"green"`/`"blue"` to invert all three.
#[wasm_bindgen]
pub fn invert_wasm(data: &[u8], width: usize, height: usize, keep: &str) -> Option<Vec<u8>> {
    let mut fuzzy = ingest(data, width, height)?;
    fuzzy.invert(ColorFilter::parse(keep));
    Some(fuzzy.into_buffer().into_rgba())
}

/// Convert to greyscale.
#[wasm_bindgen]
pub fn greyscale_wasm(data: &[u8], width: usize, height: usize) -> Option<Vec<u8>> {
    let mut fuzzy = ingest(data, width, height)?;
    fuzzy.greyscale();
    Some(fuzzy.into_buffer().into_rgba())
}

// ============================================================================
// Windowed filters
// ============================================================================

/// Pixelate with `block_size x block_size` cells.
#[wasm_bindgen]
pub fn pixelate_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    block_size: i32,
) -> Option<Vec<u8>> {
    let mut fuzzy = ingest(data, width, height)?;
    fuzzy.pixelate(block_size);
    Some(fuzzy.into_buffer().into_rgba())
}

/// Symmetric box blur.
#[wasm_bindgen]
pub fn box_blur_wasm(data: &[u8], width: usize, height: usize, size: i32) -> Option<Vec<u8>> {
    let mut fuzzy = ingest(data, width, height)?;
    fuzzy.box_blur(size).ok()?;
    Some(fuzzy.into_buffer().into_rgba())
}

/// Directional motion blur; `direction` is `"horizontal"` or `"vertical"`.
#[wasm_bindgen]
pub fn motion_blur_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    size: i32,
    direction: &str,
) -> Option<Vec<u8>> {
    let mut fuzzy = ingest(data, width, height)?;
    fuzzy.motion_blur(size, Direction::parse(direction)).ok()?;
    Some(fuzzy.into_buffer().into_rgba())
}

// ============================================================================
// Convolution filters
// ============================================================================

/// Convolve with a row-major 3x3 kernel given as 9 weights.
///
/// Any other kernel length yields `None` before a pixel is touched.
#[wasm_bindgen]
pub fn convolution_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    kernel: &[f32],
    divisor: f32,
    offset: f32,
) -> Option<Vec<u8>> {
    let rows: Vec<Vec<f32>> = kernel.chunks(3).map(<[f32]>::to_vec).collect();
    let matrix = ConvolutionMatrix::from_rows(&rows)
        .ok()?
        .with_divisor(divisor)
        .with_offset(offset);

    let mut fuzzy = ingest(data, width, height)?;
    fuzzy.convolution(&matrix);
    Some(fuzzy.into_buffer().into_rgba())
}

#[wasm_bindgen]
pub fn gaussian_blur_wasm(data: &[u8], width: usize, height: usize) -> Option<Vec<u8>> {
    let mut fuzzy = ingest(data, width, height)?;
    fuzzy.gaussian_blur();
    Some(fuzzy.into_buffer().into_rgba())
}

#[wasm_bindgen]
pub fn emboss_wasm(data: &[u8], width: usize, height: usize) -> Option<Vec<u8>> {
    let mut fuzzy = ingest(data, width, height)?;
    fuzzy.emboss();
    Some(fuzzy.into_buffer().into_rgba())
}

#[wasm_bindgen]
pub fn sharpen_wasm(data: &[u8], width: usize, height: usize) -> Option<Vec<u8>> {
    let mut fuzzy = ingest(data, width, height)?;
    fuzzy.sharpen();
    Some(fuzzy.into_buffer().into_rgba())
}

#[wasm_bindgen]
pub fn edge_trace_wasm(data: &[u8], width: usize, height: usize) -> Option<Vec<u8>> {
    let mut fuzzy = ingest(data, width, height)?;
    fuzzy.edge_trace();
    Some(fuzzy.into_buffer().into_rgba())
}

/// Scale every color channel by `value` (1.0 = no change, NaN falls back
/// to 1.0).
#[wasm_bindgen]
pub fn luminosity_wasm(data: &[u8], width: usize, height: usize, value: f32) -> Option<Vec<u8>> {
    let mut fuzzy = ingest(data, width, height)?;
    fuzzy.luminosity(value);
    Some(fuzzy.into_buffer().into_rgba())
}

#[wasm_bindgen]
pub fn lighten_wasm(data: &[u8], width: usize, height: usize) -> Option<Vec<u8>> {
    let mut fuzzy = ingest(data, width, height)?;
    fuzzy.lighten();
    Some(fuzzy.into_buffer().into_rgba())
}

#[wasm_bindgen]
pub fn darken_wasm(data: &[u8], width: usize, height: usize) -> Option<Vec<u8>> {
    let mut fuzzy = ingest(data, width, height)?;
    fuzzy.darken();
    Some(fuzzy.into_buffer().into_rgba())
}

// ============================================================================
// Egress
// ============================================================================

/// Nearest-neighbor resample to `new_width x new_height`; negative target
/// dimensions coerce to 0.
#[wasm_bindgen]
pub fn scale_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    new_width: i32,
    new_height: i32,
) -> Option<Vec<u8>> {
    let buffer = PixelBuffer::from_rgba(width, height, data.to_vec())?;
    let target = Dimension::new(new_width as i64, new_height as i64);
    Some(surface::resize(&buffer, target).into_rgba())
}
