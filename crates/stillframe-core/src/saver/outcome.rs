//! Result delivered to the caller of a save run, and the internal errors
//! that map onto it.

use std::fmt;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;
use crate::transform::TransformError;

/// Fixed message reported for every output I/O failure.
pub const IO_FAILURE_MESSAGE: &str = "Failed saving image";

/// Error codes reported to the caller.
///
/// Serialized forms match [`ErrorCode::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Opening or writing the destination failed.
    #[serde(rename = "IOError")]
    IoError,
    /// Closing the output stream failed. Only ever logged; see
    /// [`ImageSaver::save`](super::ImageSaver::save).
    #[serde(rename = "cameraAccess")]
    CameraAccess,
    /// The frame buffer was missing or undecodable.
    DecodeError,
    /// The processed frame could not be encoded.
    EncodeError,
    /// The request carried an unusable aspect ratio.
    InvalidArgument,
}

impl ErrorCode {
    /// Wire string understood by the host.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::IoError => "IOError",
            ErrorCode::CameraAccess => "cameraAccess",
            ErrorCode::DecodeError => "DecodeError",
            ErrorCode::EncodeError => "EncodeError",
            ErrorCode::InvalidArgument => "InvalidArgument",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal result of one save run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The frame was written; carries the absolute destination path.
    Success(PathBuf),
    /// The run failed.
    Failure { code: ErrorCode, message: String },
}

impl SaveOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SaveOutcome::Success(_))
    }

    /// Error code of a failed run.
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            SaveOutcome::Success(_) => None,
            SaveOutcome::Failure { code, .. } => Some(*code),
        }
    }
}

/// Errors raised inside the pipeline before they are turned into a
/// [`SaveOutcome::Failure`].
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("Aspect ratio must be positive and finite, got {0}")]
    InvalidAspectRatio(f64),

    #[error("Frame has no plane {0}")]
    MissingPlane(usize),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl SaveError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SaveError::InvalidAspectRatio(_) => ErrorCode::InvalidArgument,
            SaveError::MissingPlane(_) | SaveError::Decode(_) | SaveError::Transform(_) => {
                ErrorCode::DecodeError
            }
            SaveError::Encode(_) => ErrorCode::EncodeError,
            SaveError::Io(_) => ErrorCode::IoError,
        }
    }

    /// Message shown to the caller. I/O causes are not forwarded.
    pub fn message(&self) -> String {
        match self {
            SaveError::Io(_) => IO_FAILURE_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<SaveError> for SaveOutcome {
    fn from(err: SaveError) -> Self {
        SaveOutcome::Failure {
            code: err.code(),
            message: err.message(),
        }
    }
}
