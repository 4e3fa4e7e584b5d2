//! Channel isolation and inversion.
//!
//! Both filters are pixel-wise, in-place and infallible; the alpha channel
//! is never altered.

use crate::buffer::{Pixel, PixelBuffer};

/// Closed set of channel selectors for [`color_filter`] and [`invert`].
///
/// [`ColorFilter::None`] makes `color_filter` a no-op and `invert` a full
/// three-channel negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorFilter {
    Red,
    Green,
    Blue,
    #[default]
    None,
}

impl ColorFilter {
    /// Parse an adapter-supplied filter name.
    ///
    /// Unrecognized names degrade to [`ColorFilter::None`], keeping the
    /// permissive contract that a typo silently does nothing.
    pub fn parse(name: &str) -> Self {
        match name {
            "red" => Self::Red,
            "green" => Self::Green,
            "blue" => Self::Blue,
            _ => Self::None,
        }
    }
}

/// Keep only the named color channel, zeroing the other two.
///
/// `ColorFilter::None` leaves the buffer unchanged.
pub fn color_filter(buffer: &mut PixelBuffer, filter: ColorFilter) {
    let (width, height) = (buffer.width(), buffer.height());

    for x in 0..width {
        for y in 0..height {
            let p = buffer.pixel(x, y);
            let filtered = match filter {
                ColorFilter::Red => Pixel::new(p.r, 0, 0, p.a),
                ColorFilter::Green => Pixel::new(0, p.g, 0, p.a),
                ColorFilter::Blue => Pixel::new(0, 0, p.b, p.a),
                ColorFilter::None => p,
            };
            buffer.put(x, y, filtered);
        }
    }
}

/// Replace every color channel except the kept one with its negative
/// `255 - value`.
///
/// `ColorFilter::None` inverts all three color channels.
pub fn invert(buffer: &mut PixelBuffer, keep: ColorFilter) {
    let (width, height) = (buffer.width(), buffer.height());

    for x in 0..width {
        for y in 0..height {
            let p = buffer.pixel(x, y);
            let inverted = match keep {
                ColorFilter::Red => Pixel::new(p.r, 255 - p.g, 255 - p.b, p.a),
                ColorFilter::Green => Pixel::new(255 - p.r, p.g, 255 - p.b, p.a),
                ColorFilter::Blue => Pixel::new(255 - p.r, 255 - p.g, p.b, p.a),
                ColorFilter::None => Pixel::new(255 - p.r, 255 - p.g, 255 - p.b, p.a),
            };
            buffer.put(x, y, inverted);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Dimension;

    fn sample_buffer() -> PixelBuffer {
        let mut buffer = PixelBuffer::new(Dimension::of(2, 2));
        buffer.put(0, 0, Pixel::new(10, 20, 30, 40));
        buffer.put(1, 0, Pixel::new(200, 100, 50, 255));
        buffer.put(0, 1, Pixel::new(0, 255, 0, 128));
        buffer.put(1, 1, Pixel::new(255, 255, 255, 0));
        buffer
    }

    #[test]
    fn test_red_filter_zeroes_green_and_blue() {
        let mut buffer = sample_buffer();
        color_filter(&mut buffer, ColorFilter::Red);

        for y in 0..2 {
            for x in 0..2 {
                let p = buffer.pixel(x, y);
                assert_eq!(p.g, 0);
                assert_eq!(p.b, 0);
            }
        }
        // red and alpha untouched
        assert_eq!(buffer.pixel(0, 0).r, 10);
        assert_eq!(buffer.pixel(0, 0).a, 40);
        assert_eq!(buffer.pixel(1, 0).r, 200);
    }

    #[test]
    fn test_blue_filter_keeps_blue() {
        let mut buffer = sample_buffer();
        color_filter(&mut buffer, ColorFilter::Blue);
        assert_eq!(buffer.pixel(1, 0), Pixel::new(0, 0, 50, 255));
    }

    #[test]
    fn test_none_filter_is_noop() {
        let mut buffer = sample_buffer();
        let before = buffer.clone();
        color_filter(&mut buffer, ColorFilter::None);
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_invert_all_channels() {
        let mut buffer = sample_buffer();
        invert(&mut buffer, ColorFilter::None);
        assert_eq!(buffer.pixel(0, 0), Pixel::new(245, 235, 225, 40));
        assert_eq!(buffer.pixel(1, 1), Pixel::new(0, 0, 0, 0));
    }

    #[test]
    fn test_invert_keeps_named_channel() {
        let mut buffer = sample_buffer();
        invert(&mut buffer, ColorFilter::Green);
        assert_eq!(buffer.pixel(1, 0), Pixel::new(55, 100, 205, 255));
    }

    #[test]
    fn test_invert_roundtrip_restores_original() {
        let mut buffer = sample_buffer();
        let original = buffer.clone();
        invert(&mut buffer, ColorFilter::None);
        invert(&mut buffer, ColorFilter::None);
        assert_eq!(buffer, original);

        invert(&mut buffer, ColorFilter::Red);
        invert(&mut buffer, ColorFilter::Red);
        assert_eq!(buffer, original);
    }

    #[test]
    fn test_parse_degrades_to_none() {
        assert_eq!(ColorFilter::parse("red"), ColorFilter::Red);
        assert_eq!(ColorFilter::parse("gren"), ColorFilter::None);
        assert_eq!(ColorFilter::parse(""), ColorFilter::None);
    }
}
