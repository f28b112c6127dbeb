//! Stillframe Core - post-capture processing of single camera frames
//!
//! This crate takes one compressed frame from a camera pipeline, crops it to
//! a target aspect ratio, turns it upright for the lens that captured it,
//! re-encodes it and writes it to a destination path.
//!
//! # Module Structure
//!
//! - `geometry` - Crop and orientation planning (pure, no I/O)
//! - `decode` - Compressed buffer to RGB pixels
//! - `transform` - Pixel crop and quarter-turn/mirror
//! - `encode` - RGB pixels to JPEG
//! - `saver` - The save pipeline, its requests and outcomes
//! - `config` - Options shared by save runs
//!
//! Scheduling is left to the host: [`ImageSaver::save`] blocks the calling
//! thread until the run is over.

pub mod config;
pub mod decode;
pub mod encode;
pub mod geometry;
pub mod saver;
pub mod transform;

pub use config::SaveOptions;
pub use decode::{decode_frame, DecodeError, DecodedImage};
pub use encode::{encode_image, encode_jpeg, EncodeError};
pub use geometry::{plan_crop, CropPlan, LensFacing, Rotation, SourceRect};
pub use saver::{
    Completion, ErrorCode, FileOpener, FrameSource, ImageSaver, InMemoryFrame, OutputOpener,
    SaveError, SaveOutcome, SaveRequest,
};
pub use transform::{apply_plan, TransformError};
