//! Frame encoding.
//!
//! Processed frames are encoded to JPEG into an in-memory buffer before any
//! file is opened, so an encode failure never leaves a truncated output.
//!
//! # Examples
//!
//! ```ignore
//! use stillframe_core::encode::{encode_image, MAX_QUALITY};
//!
//! let jpeg_bytes = encode_image(&image, MAX_QUALITY)?;
//! println!("Encoded {} bytes", jpeg_bytes.len());
//! ```

mod jpeg;

pub use jpeg::{encode_image, encode_jpeg, EncodeError, MAX_QUALITY};
