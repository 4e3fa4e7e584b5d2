//! Pixelation.
//!
//! Partitions the buffer into `block_size x block_size` cells (the last row
//! and column of cells may be smaller at the edges), samples the pixel
//! nearest each cell's center and paints that single sample across the
//! whole cell. A representative sample, not an average - that is what
//! distinguishes this from blur.

use crate::buffer::PixelBuffer;

/// Pixelate the buffer in place.
///
/// `block_size` clamps silently: values at or below 0 become 1, values at or
/// above the buffer width become `width - 1` (floored at 1 so a one-pixel
/// wide buffer cannot produce a zero step). `pixelate(1)` is the identity.
pub fn pixelate(buffer: &mut PixelBuffer, block_size: i32) {
    let (width, height) = (buffer.width(), buffer.height());
    if width == 0 || height == 0 {
        return;
    }

    let mut size = if block_size <= 0 { 1 } else { block_size as usize };
    if size >= width {
        size = (width - 1).max(1);
    }

    let mut i = 0;
    while i < width {
        let mut j = 0;
        while j < height {
            // sample at the cell center, walked back inside the buffer edge
            let mut offset_x = size / 2;
            let mut offset_y = size / 2;
            while i + offset_x >= width {
                offset_x -= 1;
            }
            while j + offset_y >= height {
                offset_y -= 1;
            }
            let sample = buffer.pixel(i + offset_x, j + offset_y);

            for x in i..(i + size).min(width) {
                for y in j..(j + size).min(height) {
                    buffer.put(x, y, sample);
                }
            }

            j += size;
        }
        i += size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{Dimension, Pixel};

    fn gradient(width: usize, height: usize) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(Dimension::of(width, height));
        for y in 0..height {
            for x in 0..width {
                buffer.put(x, y, Pixel::rgb((x * 10) as u8, (y * 10) as u8, 0));
            }
        }
        buffer
    }

    #[test]
    fn test_pixelate_one_is_identity() {
        let mut buffer = gradient(5, 4);
        let original = buffer.clone();
        pixelate(&mut buffer, 1);
        assert_eq!(buffer, original);
    }

    #[test]
    fn test_nonpositive_block_size_is_identity() {
        let mut buffer = gradient(5, 4);
        let original = buffer.clone();
        pixelate(&mut buffer, 0);
        assert_eq!(buffer, original);
        pixelate(&mut buffer, -7);
        assert_eq!(buffer, original);
    }

    #[test]
    fn test_cells_are_uniform() {
        let mut buffer = gradient(6, 6);
        pixelate(&mut buffer, 3);

        // every pixel of a cell carries the sample taken at origin + 1 (3/2)
        for (cell_x, cell_y) in [(0, 0), (3, 0), (0, 3), (3, 3)] {
            let expected = Pixel::rgb(((cell_x + 1) * 10) as u8, ((cell_y + 1) * 10) as u8, 0);
            for x in cell_x..cell_x + 3 {
                for y in cell_y..cell_y + 3 {
                    assert_eq!(buffer.pixel(x, y), expected, "cell ({cell_x}, {cell_y})");
                }
            }
        }
    }

    #[test]
    fn test_edge_cells_walk_sample_back_inside() {
        let mut buffer = gradient(5, 5);
        pixelate(&mut buffer, 3);

        // the right/bottom cells start at 3; origin + 3/2 = 4 stays in bounds
        let expected = Pixel::rgb(40, 40, 0);
        assert_eq!(buffer.pixel(4, 4), expected);
        assert_eq!(buffer.pixel(3, 3), expected);

        // the cell at origin 4 of a 5-wide row spans one column; its sample
        // offset walks back from 4 + 2 to the edge pixel
        let mut wide = gradient(5, 2);
        pixelate(&mut wide, 4);
        assert_eq!(wide.pixel(4, 0).r, 40);
    }

    #[test]
    fn test_oversized_block_clamps_to_width_minus_one() {
        let mut buffer = gradient(4, 4);
        pixelate(&mut buffer, 99);

        // block size becomes 3: the top-left cell is painted with (1, 1)
        assert_eq!(buffer.pixel(0, 0), Pixel::rgb(10, 10, 0));
        assert_eq!(buffer.pixel(2, 2), Pixel::rgb(10, 10, 0));
    }

    #[test]
    fn test_single_column_buffer_does_not_hang() {
        let mut buffer = gradient(1, 3);
        pixelate(&mut buffer, 5);
        assert_eq!(buffer.width(), 1);
    }

    #[test]
    fn test_alpha_travels_with_sample() {
        let mut buffer = PixelBuffer::filled(Dimension::of(2, 2), Pixel::new(9, 9, 9, 9));
        buffer.put(1, 1, Pixel::new(50, 50, 50, 200));
        pixelate(&mut buffer, 2);
        // sample for the single 2x2 cell is taken at (1, 1)
        assert_eq!(buffer.pixel(0, 0), Pixel::new(50, 50, 50, 200));
    }
}
