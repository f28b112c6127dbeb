//! Crop and orientation planning for captured frames.
//!
//! Camera sensors deliver landscape-oriented buffers that are shown upright
//! (portrait) once rotated by a quarter turn. All planning therefore happens in
//! the upright "working" frame, where:
//!
//! - working width = decoded height
//! - working height = decoded width
//!
//! The plan removes a symmetric cut-off from exactly one axis: rows when the
//! frame is taller than the target aspect ratio demands, columns otherwise.
//! Nothing here performs I/O or touches pixels.
//!
//! # Example
//!
//! ```ignore
//! use stillframe_core::geometry::{plan_crop, LensFacing};
//!
//! let plan = plan_crop(400, 300, 1.0, LensFacing::Back);
//! assert_eq!((plan.crop_width, plan.crop_height), (300, 300));
//! ```

use serde::{Deserialize, Serialize};

/// Which physical camera produced the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LensFacing {
    /// Rear camera.
    #[default]
    Back,
    /// Front (selfie) camera, whose sensor image is mirrored.
    Front,
}

impl LensFacing {
    /// Quarter turn that brings a frame from this lens upright.
    pub fn rotation(self) -> Rotation {
        match self {
            LensFacing::Back => Rotation::Clockwise90,
            LensFacing::Front => Rotation::CounterClockwise90,
        }
    }

    /// Whether the rotated frame must also be mirrored horizontally.
    pub fn mirrors(self) -> bool {
        matches!(self, LensFacing::Front)
    }
}

/// Quarter-turn rotation applied after cropping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    /// +90 degrees.
    Clockwise90,
    /// -90 degrees.
    CounterClockwise90,
}

impl Rotation {
    /// Signed angle in degrees, positive = clockwise.
    pub fn degrees(self) -> i32 {
        match self {
            Rotation::Clockwise90 => 90,
            Rotation::CounterClockwise90 => -90,
        }
    }
}

/// Pixel rectangle in sensor (decoded buffer) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Crop rectangle and orientation transform for one frame.
///
/// Crop fields are in the upright working frame. By construction
/// `crop_width = working_width - 2 * crop_left` and
/// `crop_height = working_height - 2 * crop_top`, and at most one of
/// `crop_left`/`crop_top` is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropPlan {
    /// Columns removed from each side of the working frame.
    pub crop_left: u32,
    /// Rows removed from the top and bottom of the working frame.
    pub crop_top: u32,
    /// Width of the result in the working frame.
    pub crop_width: u32,
    /// Height of the result in the working frame.
    pub crop_height: u32,
    pub rotation: Rotation,
    pub mirror_horizontal: bool,
}

impl CropPlan {
    /// Map the plan back onto the decoded sensor buffer.
    ///
    /// Working rows run along the sensor's x axis, so the row cut-off becomes
    /// a horizontal offset and the column cut-off a vertical one.
    pub fn source_rect(&self) -> SourceRect {
        SourceRect {
            x: self.crop_top,
            y: self.crop_left,
            width: self.crop_height,
            height: self.crop_width,
        }
    }

    /// Dimensions of the final upright image as (width, height).
    pub fn output_dimensions(&self) -> (u32, u32) {
        (self.crop_width, self.crop_height)
    }
}

/// Compute the crop and orientation for a decoded frame.
///
/// # Arguments
///
/// * `decoded_width` - Width of the decoded sensor buffer
/// * `decoded_height` - Height of the decoded sensor buffer
/// * `aspect_ratio` - Target width / height of the upright output, must be > 0
/// * `lens_facing` - Camera that produced the frame
///
/// # Behavior
///
/// - Desired working height is `round(working_width / aspect_ratio)`.
/// - Frames taller than desired lose rows symmetrically; zoom stays 1.
/// - Frames shorter than desired are zoomed by `desired / working_height` and
///   lose the overflowing columns symmetrically.
/// - Each cut-off is clamped so at least one row and one column remain.
///
/// The function is total; validating `aspect_ratio` is the caller's job.
pub fn plan_crop(
    decoded_width: u32,
    decoded_height: u32,
    aspect_ratio: f64,
    lens_facing: LensFacing,
) -> CropPlan {
    let working_width = i64::from(decoded_height);
    let working_height = i64::from(decoded_width);

    let desired_height = (working_width as f64 / aspect_ratio).round() as i64;
    let height_delta = desired_height - working_height;

    let (crop_left, crop_top) = if height_delta <= 0 {
        (0, -height_delta / 2)
    } else {
        let zoom = desired_height as f64 / working_height as f64;
        let zoomed_width = (working_width as f64 * zoom) as i64;
        (((zoomed_width - working_width) / 2).max(0), 0)
    };

    let crop_left = crop_left.min((working_width - 1) / 2);
    let crop_top = crop_top.min((working_height - 1) / 2);

    CropPlan {
        crop_left: crop_left as u32,
        crop_top: crop_top as u32,
        crop_width: (working_width - 2 * crop_left) as u32,
        crop_height: (working_height - 2 * crop_top) as u32,
        rotation: lens_facing.rotation(),
        mirror_horizontal: lens_facing.mirrors(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taller_frame_crops_rows() {
        // Working frame is 300 wide, 400 tall; square target wants 300 rows.
        let plan = plan_crop(400, 300, 1.0, LensFacing::Back);

        assert_eq!(plan.crop_left, 0);
        assert_eq!(plan.crop_top, 50);
        assert_eq!(plan.crop_width, 300);
        assert_eq!(plan.crop_height, 300);
    }

    #[test]
    fn test_shorter_frame_crops_columns() {
        // Desired height 600 -> zoom 1.5 -> zoomed width 450 -> 75 per side.
        let plan = plan_crop(400, 300, 0.5, LensFacing::Back);

        assert_eq!(plan.crop_top, 0);
        assert_eq!(plan.crop_left, 75);
        assert_eq!(plan.crop_width, 150);
        assert_eq!(plan.crop_height, 400);
    }

    #[test]
    fn test_exact_ratio_needs_no_crop() {
        let plan = plan_crop(1200, 1600, 4.0 / 3.0, LensFacing::Back);

        assert_eq!(plan.crop_left, 0);
        assert_eq!(plan.crop_top, 0);
        assert_eq!(plan.output_dimensions(), (1600, 1200));
    }

    #[test]
    fn test_desired_height_is_rounded() {
        // 300 / 0.7 = 428.57 -> 429, delta 29 -> zoom 429/400.
        let plan = plan_crop(400, 300, 0.7, LensFacing::Back);
        let zoomed = (300.0 * (429.0 / 400.0)) as u32;

        assert_eq!(plan.crop_left, (zoomed - 300) / 2);
    }

    #[test]
    fn test_odd_delta_truncates() {
        // Desired 300, working height 401 -> delta -101 -> 50 rows per side.
        let plan = plan_crop(401, 300, 1.0, LensFacing::Back);

        assert_eq!(plan.crop_top, 50);
        assert_eq!(plan.crop_height, 301);
    }

    #[test]
    fn test_extreme_zoom_keeps_one_column() {
        // Zoom factor 4 would cut more than the whole width.
        let plan = plan_crop(100, 100, 0.25, LensFacing::Back);

        assert_eq!(plan.crop_left, 49);
        assert_eq!(plan.crop_width, 2);
        assert!(plan.crop_width >= 1);
    }

    #[test]
    fn test_extreme_wide_ratio_keeps_one_row() {
        let plan = plan_crop(100, 100, 1.0e6, LensFacing::Back);

        assert_eq!(plan.crop_top, 49);
        assert_eq!(plan.crop_height, 2);
    }

    #[test]
    fn test_back_lens_orientation() {
        let plan = plan_crop(40, 30, 0.75, LensFacing::Back);

        assert_eq!(plan.rotation, Rotation::Clockwise90);
        assert_eq!(plan.rotation.degrees(), 90);
        assert!(!plan.mirror_horizontal);
    }

    #[test]
    fn test_front_lens_orientation() {
        let plan = plan_crop(40, 30, 0.75, LensFacing::Front);

        assert_eq!(plan.rotation, Rotation::CounterClockwise90);
        assert_eq!(plan.rotation.degrees(), -90);
        assert!(plan.mirror_horizontal);
    }

    #[test]
    fn test_source_rect_swaps_axes() {
        let plan = plan_crop(400, 300, 1.0, LensFacing::Back);
        let rect = plan.source_rect();

        // Row cut-off in the working frame lands on the sensor x axis.
        assert_eq!(rect, SourceRect { x: 50, y: 0, width: 300, height: 300 });

        let plan = plan_crop(400, 300, 0.5, LensFacing::Back);
        assert_eq!(
            plan.source_rect(),
            SourceRect { x: 0, y: 75, width: 400, height: 150 }
        );
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
