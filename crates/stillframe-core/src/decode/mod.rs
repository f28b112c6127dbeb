//! Frame decoding.
//!
//! Capture buffers arrive as compressed images (JPEG in practice, PNG is
//! accepted too). Decoding produces an RGB8 [`DecodedImage`] in sensor
//! orientation; the upright transform is planned separately in
//! [`crate::geometry`].
//!
//! # Examples
//!
//! ```ignore
//! use stillframe_core::decode::decode_frame;
//!
//! let image = decode_frame(&jpeg_bytes)?;
//! println!("Decoded {}x{} frame", image.width, image.height);
//! ```

mod frame;
mod types;

pub use frame::decode_frame;
pub use types::{DecodeError, DecodedImage};
