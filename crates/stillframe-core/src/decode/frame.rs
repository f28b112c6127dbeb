//! Decoding of compressed capture buffers.

use std::io::Cursor;

use image::ImageReader;

use super::{DecodeError, DecodedImage};

/// Decode a compressed frame buffer into RGB pixels.
///
/// The format is sniffed from the buffer contents. EXIF orientation is not
/// applied; the result stays in sensor orientation.
///
/// # Errors
///
/// Returns `DecodeError::EmptyBuffer` for a zero-length buffer,
/// `DecodeError::InvalidFormat` if the format cannot be recognized and
/// `DecodeError::CorruptedFile` if decoding fails part way.
pub fn decode_frame(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::EmptyBuffer);
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    Ok(DecodedImage::from_rgb_image(img.into_rgb8()))
}
