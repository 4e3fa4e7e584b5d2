//! Greyscale conversion.
//!
//! Replaces R, G and B with the BT.601 luma `0.299R + 0.587G + 0.114B`,
//! truncated toward zero; alpha is untouched. The weighted sum is computed
//! in integer arithmetic (`(299R + 587G + 114B) / 1000`) so the truncation
//! is exact and a second application reproduces the first bit-for-bit.

use crate::buffer::{Pixel, PixelBuffer};

/// Convert the buffer to greyscale in place.
pub fn greyscale(buffer: &mut PixelBuffer) {
    let (width, height) = (buffer.width(), buffer.height());

    for x in 0..width {
        for y in 0..height {
            let p = buffer.pixel(x, y);
            let luma = (299 * p.r as u32 + 587 * p.g as u32 + 114 * p.b as u32) / 1000;
            let grey = luma as u8;
            buffer.put(x, y, Pixel::new(grey, grey, grey, p.a));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Dimension;

    #[test]
    fn test_greyscale_luma_weights() {
        let mut buffer = PixelBuffer::filled(Dimension::of(1, 1), Pixel::rgb(255, 0, 0));
        greyscale(&mut buffer);
        // 299 * 255 / 1000 = 76
        assert_eq!(buffer.pixel(0, 0), Pixel::rgb(76, 76, 76));

        let mut buffer = PixelBuffer::filled(Dimension::of(1, 1), Pixel::rgb(0, 255, 0));
        greyscale(&mut buffer);
        // 587 * 255 / 1000 = 149
        assert_eq!(buffer.pixel(0, 0).r, 149);

        let mut buffer = PixelBuffer::filled(Dimension::of(1, 1), Pixel::rgb(0, 0, 255));
        greyscale(&mut buffer);
        // 114 * 255 / 1000 = 29
        assert_eq!(buffer.pixel(0, 0).r, 29);
    }

    #[test]
    fn test_greyscale_sets_all_color_channels_equal() {
        let mut buffer = PixelBuffer::filled(Dimension::of(2, 2), Pixel::new(200, 100, 50, 77));
        greyscale(&mut buffer);
        let p = buffer.pixel(1, 1);
        assert_eq!(p.r, p.g);
        assert_eq!(p.g, p.b);
        assert_eq!(p.a, 77); // alpha untouched
    }

    #[test]
    fn test_greyscale_is_idempotent() {
        let mut buffer = PixelBuffer::new(Dimension::of(16, 16));
        for y in 0..16 {
            for x in 0..16 {
                let v = (x * 16 + y) as u8;
                buffer.put(x, y, Pixel::rgb(v, v.wrapping_mul(3), 255 - v));
            }
        }

        greyscale(&mut buffer);
        let once = buffer.clone();
        greyscale(&mut buffer);
        assert_eq!(buffer, once);
    }
}
