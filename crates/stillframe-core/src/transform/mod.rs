//! Pixel operations that realize a [`CropPlan`].
//!
//! # Transform Order
//!
//! 1. Crop the sensor buffer to [`CropPlan::source_rect`]
//! 2. Rotate by the planned quarter turn
//! 3. Mirror horizontally (front lens only)
//!
//! Steps 2 and 3 run as a single pass over the cropped pixels.
//!
//! # Coordinate System
//!
//! - Crop rectangles are in pixel coordinates of the decoded buffer
//! - Origin is top-left corner
//! - Positive rotation = clockwise

mod crop;
mod orient;

pub use crop::crop_region;
pub use orient::orient;

use thiserror::Error;

use crate::decode::DecodedImage;
use crate::geometry::CropPlan;

/// Errors from applying a plan to an image.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// The pixel buffer does not hold `width * height * 3` bytes.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Crop and orient a decoded frame according to `plan`.
///
/// The result measures `plan.output_dimensions()` whenever the plan was
/// computed for this image's dimensions. The image is checked first, since
/// `crop_region` and `orient` index its pixels directly.
pub fn apply_plan(image: &DecodedImage, plan: &CropPlan) -> Result<DecodedImage, TransformError> {
    if image.width == 0 || image.height == 0 {
        return Err(TransformError::InvalidDimensions {
            width: image.width,
            height: image.height,
        });
    }

    let expected = (image.width as usize) * (image.height as usize) * 3;
    if image.pixels.len() != expected {
        return Err(TransformError::InvalidPixelData {
            expected,
            actual: image.pixels.len(),
        });
    }

    let cropped = crop_region(image, plan.source_rect());
    Ok(orient(&cropped, plan.rotation, plan.mirror_horizontal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{plan_crop, LensFacing};

    fn striped(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for _ in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&[x as u8, 0, 0]);
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    #[test]
    fn test_apply_plan_row_cut() {
        // 40x30 landscape sensor, square upright target -> 30x30.
        let img = striped(40, 30);
        let plan = plan_crop(40, 30, 1.0, LensFacing::Back);
        let result = apply_plan(&img, &plan).unwrap();

        assert_eq!((result.width, result.height), plan.output_dimensions());
        assert_eq!((result.width, result.height), (30, 30));
        // Sensor column 5 is the first one kept; it becomes the top row.
        assert_eq!(result.pixel(0, 0)[0], 5);
        assert_eq!(result.pixel(29, 0)[0], 5);
    }

    #[test]
    fn test_apply_plan_column_cut() {
        let img = striped(40, 30);
        let plan = plan_crop(40, 30, 0.5, LensFacing::Front);
        let result = apply_plan(&img, &plan).unwrap();

        assert_eq!((result.width, result.height), plan.output_dimensions());
        assert!(result.width < 30);
        assert_eq!(result.height, 40);
    }

    #[test]
    fn test_front_and_back_are_mirror_images() {
        let mut pixels = Vec::new();
        for i in 0..(8 * 6) {
            pixels.extend_from_slice(&[i as u8, (i * 3) as u8, (i * 7) as u8]);
        }
        let img = DecodedImage::new(8, 6, pixels);

        let back = apply_plan(&img, &plan_crop(8, 6, 0.75, LensFacing::Back)).unwrap();
        let front = apply_plan(&img, &plan_crop(8, 6, 0.75, LensFacing::Front)).unwrap();

        // Clockwise vs counter-clockwise-then-mirrored differ by a vertical flip.
        assert_eq!((back.width, back.height), (front.width, front.height));
        for y in 0..back.height {
            for x in 0..back.width {
                assert_eq!(back.pixel(x, y), front.pixel(x, back.height - 1 - y));
            }
        }
    }

    #[test]
    fn test_apply_plan_rejects_short_buffer() {
        // Public fields allow a buffer that disagrees with the dimensions.
        let img = DecodedImage {
            width: 40,
            height: 30,
            pixels: vec![0u8; 10],
        };
        let plan = plan_crop(40, 30, 1.0, LensFacing::Back);

        assert_eq!(
            apply_plan(&img, &plan),
            Err(TransformError::InvalidPixelData { expected: 3600, actual: 10 })
        );
    }

    #[test]
    fn test_apply_plan_rejects_empty_image() {
        let img = DecodedImage {
            width: 0,
            height: 30,
            pixels: Vec::new(),
        };
        let plan = plan_crop(1, 30, 1.0, LensFacing::Front);

        assert!(matches!(
            apply_plan(&img, &plan),
            Err(TransformError::InvalidDimensions { width: 0, height: 30 })
        ));
    }
}
