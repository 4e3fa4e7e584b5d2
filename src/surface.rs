//! Surface adapter helpers: dimension negotiation and resampling.
//!
//! Everything here sits outside the filter core. The engine only consumes
//! and produces [`PixelBuffer`] values; turning a buffer into a differently
//! sized one (or deciding what "scale to width 500" means when no height is
//! given) is adapter work.

use crate::buffer::{Dimension, PixelBuffer};

/// Resolve output dimensions for a scale request.
///
/// When only one dimension is given the other is derived from the current
/// aspect ratio with truncating integer math; when neither is given the
/// current dimensions are kept.
pub fn fit_dimensions(
    current: Dimension,
    width: Option<usize>,
    height: Option<usize>,
) -> Dimension {
    match (width, height) {
        (Some(width), Some(height)) => Dimension::of(width, height),
        (Some(width), None) => {
            let height = if width != current.width && current.width > 0 {
                width * current.height / current.width
            } else {
                current.height
            };
            Dimension::of(width, height)
        }
        (None, Some(height)) => {
            let width = if height != current.height && current.height > 0 {
                height * current.width / current.height
            } else {
                current.width
            };
            Dimension::of(width, height)
        }
        (None, None) => current,
    }
}

/// Nearest-neighbor resample into a new buffer of the target dimensions.
///
/// Each destination pixel copies the source pixel its center maps onto.
/// Scaling an empty buffer (or to an empty target) yields an empty result.
pub fn resize(buffer: &PixelBuffer, target: Dimension) -> PixelBuffer {
    let (src_width, src_height) = (buffer.width(), buffer.height());
    let mut output = PixelBuffer::new(target);
    if src_width == 0 || src_height == 0 {
        return output;
    }

    for y in 0..target.height {
        let sy = y * src_height / target.height;
        for x in 0..target.width {
            let sx = x * src_width / target.width;
            output.put(x, y, buffer.pixel(sx, sy));
        }
    }

    output
}
