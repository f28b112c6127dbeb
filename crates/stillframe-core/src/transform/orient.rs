//! Quarter-turn rotation with optional horizontal mirror.
//!
//! Rotation and mirror are composed into one transform and applied with
//! inverse mapping: for each output pixel we compute the single source pixel
//! it comes from. Quarter turns map pixel centers onto pixel centers, so no
//! interpolation is needed and the result is lossless.
//!
//! For a `w x h` source the output is `h x w`, and with `(x, y)` an output
//! coordinate after undoing the mirror:
//! ```text
//! clockwise:         src = (y,         h - 1 - x)
//! counter-clockwise: src = (w - 1 - y, x)
//! ```

use crate::decode::DecodedImage;
use crate::geometry::Rotation;

/// Rotate by a quarter turn, then mirror horizontally if requested.
pub fn orient(image: &DecodedImage, rotation: Rotation, mirror_horizontal: bool) -> DecodedImage {
    let (src_w, src_h) = (image.width, image.height);
    let (dst_w, dst_h) = (src_h, src_w);

    let mut output = Vec::with_capacity(image.pixels.len());

    for dst_y in 0..dst_h {
        for dst_x in 0..dst_w {
            let x = if mirror_horizontal { dst_w - 1 - dst_x } else { dst_x };
            let y = dst_y;

            let (src_x, src_y) = match rotation {
                Rotation::Clockwise90 => (y, src_h - 1 - x),
                Rotation::CounterClockwise90 => (src_w - 1 - y, x),
            };

            output.extend_from_slice(&image.pixel(src_x, src_y));
        }
    }

    DecodedImage {
        width: dst_w,
        height: dst_h,
        pixels: output,
    }
}
