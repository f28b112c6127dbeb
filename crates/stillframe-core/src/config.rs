//! Saver configuration.

use serde::{Deserialize, Serialize};

use crate::encode::MAX_QUALITY;

/// Options shared by every save run of an [`ImageSaver`](crate::saver::ImageSaver).
///
/// Missing fields fall back to their defaults when deserialized, so hosts can
/// supply a partial document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveOptions {
    /// JPEG quality (1-100). Defaults to the maximum.
    pub jpeg_quality: u8,
    /// Flush file contents to disk before closing the output.
    ///
    /// Deferred write errors then surface as close failures instead of
    /// being lost when the file handle is dropped.
    pub sync_on_close: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            jpeg_quality: MAX_QUALITY,
            sync_on_close: true,
        }
    }
}

impl SaveOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality;
        self
    }

    pub fn with_sync_on_close(mut self, sync: bool) -> Self {
        self.sync_on_close = sync;
        self
    }
}
