//! Box and motion blur.
//!
//! One primitive, [`motion_blur`], with two named shapes: a symmetric
//! window ([`box_blur`]) and a single-axis window ([`directional_blur`]).
//!
//! The pass is in-place and order-dependent. For every origin pixel - outer
//! loop over x, inner over y - the R/G/B mean over the window anchored at
//! the origin is written back to every pixel of that window, so later
//! origins read already-blurred neighbor data. That interleaving is part of
//! the contract; computing all outputs from a snapshot produces different
//! bytes. Alpha is not blurred: each destination pixel keeps its own alpha.

use crate::buffer::PixelBuffer;
use crate::error::FilterError;
use crate::filters::region::average_region;

/// Axis selector for [`directional_blur`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    /// Parse an adapter-supplied direction name; anything that is not
    /// `"vertical"` is horizontal.
    pub fn parse(name: &str) -> Self {
        match name {
            "vertical" => Self::Vertical,
            _ => Self::Horizontal,
        }
    }
}

/// Blur with a rectangular `window_width x window_height` window.
///
/// Window dimensions at or below 0 leave the buffer untouched: the window
/// writes nothing, so the whole pass degrades to a no-op rather than an
/// error. The `DivisionByZero` path of the averager is unreachable here
/// (every window contains its in-bounds origin) and only propagated to keep
/// the contract explicit.
pub fn motion_blur(
    buffer: &mut PixelBuffer,
    window_width: i32,
    window_height: i32,
) -> Result<(), FilterError> {
    let window_width = window_width.max(0) as usize;
    let window_height = window_height.max(0) as usize;
    if window_width == 0 || window_height == 0 {
        return Ok(());
    }

    let (width, height) = (buffer.width(), buffer.height());

    for i in 0..width {
        for j in 0..height {
            let mut average = average_region(buffer, i, j, window_width, window_height)?;

            for x in i..(i + window_width).min(width) {
                for y in j..(j + window_height).min(height) {
                    average.a = buffer.pixel(x, y).a;
                    buffer.put(x, y, average);
                }
            }
        }
    }

    Ok(())
}

/// Symmetric blur: `size x size` window.
pub fn box_blur(buffer: &mut PixelBuffer, size: i32) -> Result<(), FilterError> {
    motion_blur(buffer, size, size)
}

/// Single-axis blur: a `size x 1` or `1 x size` window depending on the
/// direction.
pub fn directional_blur(
    buffer: &mut PixelBuffer,
    size: i32,
    direction: Direction,
) -> Result<(), FilterError> {
    match direction {
        Direction::Horizontal => motion_blur(buffer, size, 1),
        Direction::Vertical => motion_blur(buffer, 1, size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{Dimension, Pixel};

    /// 4x4 checkerboard: black where x + y is even, white elsewhere.
    fn checkerboard() -> PixelBuffer {
        let mut buffer = PixelBuffer::new(Dimension::of(4, 4));
        for y in 0..4 {
            for x in 0..4 {
                let v = if (x + y) % 2 == 0 { 0 } else { 255 };
                buffer.put(x, y, Pixel::rgb(v, v, v));
            }
        }
        buffer
    }

    #[test]
    fn test_box_blur_checkerboard_exact_bytes() {
        let mut buffer = checkerboard();
        box_blur(&mut buffer, 2).unwrap();

        // Hand-traced through the sequential pass: each origin averages its
        // 2x2 window over the current (partially blurred) state, then
        // repaints the window, column by column.
        let expected = [
            [127, 127, 119, 139], // y = 0
            [127, 95, 159, 127],  // y = 1
            [127, 143, 115, 121], // y = 2
            [127, 143, 115, 121], // y = 3
        ];

        for y in 0..4 {
            for x in 0..4 {
                let p = buffer.pixel(x, y);
                assert_eq!(p.r, expected[y][x], "pixel ({x}, {y})");
                assert_eq!(p.g, expected[y][x]);
                assert_eq!(p.b, expected[y][x]);
                assert_eq!(p.a, 255);
            }
        }
    }

    #[test]
    fn test_blur_preserves_per_pixel_alpha() {
        let mut buffer = checkerboard();
        buffer.put(2, 1, Pixel::new(255, 255, 255, 42));
        box_blur(&mut buffer, 3).unwrap();
        assert_eq!(buffer.pixel(2, 1).a, 42);
        assert_eq!(buffer.pixel(0, 0).a, 255);
    }

    #[test]
    fn test_zero_and_negative_size_are_noops() {
        let mut buffer = checkerboard();
        let original = buffer.clone();
        box_blur(&mut buffer, 0).unwrap();
        assert_eq!(buffer, original);
        box_blur(&mut buffer, -4).unwrap();
        assert_eq!(buffer, original);
    }

    #[test]
    fn test_box_blur_one_is_identity() {
        let mut buffer = checkerboard();
        let original = buffer.clone();
        box_blur(&mut buffer, 1).unwrap();
        assert_eq!(buffer, original);
    }

    #[test]
    fn test_horizontal_blur_stays_inside_rows() {
        // rows all-black / all-white: a horizontal window never crosses rows
        let mut buffer = PixelBuffer::new(Dimension::of(4, 2));
        for x in 0..4 {
            buffer.put(x, 0, Pixel::rgb(0, 0, 0));
            buffer.put(x, 1, Pixel::rgb(255, 255, 255));
        }
        let original = buffer.clone();

        directional_blur(&mut buffer, 3, Direction::Vertical).unwrap();
        assert_ne!(buffer, original, "vertical blur must mix the two rows");

        let mut buffer = original.clone();
        directional_blur(&mut buffer, 3, Direction::Horizontal).unwrap();
        assert_eq!(buffer, original, "horizontal blur stays inside each row");
    }

    #[test]
    fn test_direction_parse_defaults_to_horizontal() {
        assert_eq!(Direction::parse("vertical"), Direction::Vertical);
        assert_eq!(Direction::parse("diagonal"), Direction::Horizontal);
    }
}
