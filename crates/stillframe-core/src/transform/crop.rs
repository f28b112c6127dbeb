//! Pixel-rectangle cropping.

use crate::decode::DecodedImage;
use crate::geometry::SourceRect;

/// Copy a sub-rectangle out of an image.
///
/// The rectangle is given in pixel coordinates of `image`.
///
/// # Behavior
///
/// - Rectangles extending past the image are clamped to its bounds
/// - Minimum output dimension is 1x1 pixels
/// - A rectangle covering the whole image returns a copy
pub fn crop_region(image: &DecodedImage, rect: SourceRect) -> DecodedImage {
    if rect.x == 0 && rect.y == 0 && rect.width >= image.width && rect.height >= image.height {
        return image.clone();
    }

    let left = rect.x.min(image.width.saturating_sub(1));
    let top = rect.y.min(image.height.saturating_sub(1));
    let right = left.saturating_add(rect.width).min(image.width);
    let bottom = top.saturating_add(rect.height).min(image.height);

    let out_width = right.saturating_sub(left).max(1);
    let out_height = bottom.saturating_sub(top).max(1);

    let src_stride = image.width as usize * 3;
    let row_len = out_width as usize * 3;
    let mut output = Vec::with_capacity(row_len * out_height as usize);

    // Rows are contiguous in both buffers, so copy a whole row at a time.
    for y in top..top + out_height {
        let start = y as usize * src_stride + left as usize * 3;
        output.extend_from_slice(&image.pixels[start..start + row_len]);
    }

    DecodedImage {
        width: out_width,
        height: out_height,
        pixels: output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a test image where each pixel has a unique value based on position.
    fn test_image(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                pixels.extend_from_slice(&[v, v, v]);
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    fn rect(x: u32, y: u32, width: u32, height: u32) -> SourceRect {
        SourceRect { x, y, width, height }
    }

    #[test]
    fn test_full_rect_is_identity() {
        let img = test_image(20, 10);
        let result = crop_region(&img, rect(0, 0, 20, 10));

        assert_eq!(result, img);
    }

    #[test]
    fn test_symmetric_column_cut() {
        let img = test_image(10, 4);
        let result = crop_region(&img, rect(2, 0, 6, 4));

        assert_eq!((result.width, result.height), (6, 4));
        assert_eq!(result.pixel(0, 0), img.pixel(2, 0));
        assert_eq!(result.pixel(5, 3), img.pixel(7, 3));
    }

    #[test]
    fn test_symmetric_row_cut() {
        let img = test_image(4, 10);
        let result = crop_region(&img, rect(0, 3, 4, 4));

        assert_eq!((result.width, result.height), (4, 4));
        // Value at (0, 3) = 3 * 4 = 12
        assert_eq!(result.pixels[0], 12);
    }

    #[test]
    fn test_oversized_rect_is_clamped() {
        let img = test_image(10, 10);
        let result = crop_region(&img, rect(8, 8, 50, 50));

        assert_eq!((result.width, result.height), (2, 2));
    }

    #[test]
    fn test_empty_rect_yields_one_pixel() {
        let img = test_image(10, 10);
        let result = crop_region(&img, rect(5, 5, 0, 0));

        assert_eq!((result.width, result.height), (1, 1));
        assert_eq!(result.pixel(0, 0), img.pixel(5, 5));
    }
}
