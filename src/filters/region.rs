//! Region averaging, the shared primitive behind the blur family.

use crate::buffer::{Pixel, PixelBuffer};
use crate::error::FilterError;

/// Mean of R, G and B over the window `[x, x + window_width) x
/// [y, y + window_height)` clipped to the buffer bounds, with integer
/// truncation. The returned alpha is always 255; blur overwrites it per
/// destination pixel.
///
/// A window with no in-bounds pixels is [`FilterError::DivisionByZero`].
/// Callers avoid it by construction: a non-empty window anchored at an
/// in-bounds origin always contains at least that origin.
pub fn average_region(
    buffer: &PixelBuffer,
    x: usize,
    y: usize,
    window_width: usize,
    window_height: usize,
) -> Result<Pixel, FilterError> {
    let right = (x + window_width).min(buffer.width());
    let bottom = (y + window_height).min(buffer.height());

    let mut sum_r = 0u64;
    let mut sum_g = 0u64;
    let mut sum_b = 0u64;
    let mut count = 0u64;

    for i in x..right {
        for j in y..bottom {
            let p = buffer.pixel(i, j);
            sum_r += p.r as u64;
            sum_g += p.g as u64;
            sum_b += p.b as u64;
            count += 1;
        }
    }

    if count == 0 {
        return Err(FilterError::DivisionByZero);
    }

    Ok(Pixel::from_i32(
        (sum_r / count) as i32,
        (sum_g / count) as i32,
        (sum_b / count) as i32,
        255,
    ))
}
