//! Save pipeline for captured frames.
//!
//! One [`SaveRequest`] runs through these steps, in order, on the caller's
//! thread:
//!
//! 1. Read the compressed bytes of the frame's first plane
//! 2. Decode them to RGB pixels
//! 3. Plan the crop and orientation ([`crate::geometry::plan_crop`])
//! 4. Crop, rotate and mirror ([`crate::transform::apply_plan`])
//! 5. Encode to JPEG in memory
//! 6. Write the bytes to the destination (truncate or create) and close it
//! 7. Release the frame
//! 8. Deliver exactly one [`SaveOutcome`] to the request's completion
//!
//! Nothing is retried and a partially written file is left in place. The
//! run never panics or returns an error to the caller; every failure is
//! turned into [`SaveOutcome::Failure`].
//!
//! # Example
//!
//! ```ignore
//! use stillframe_core::{ImageSaver, InMemoryFrame, LensFacing, SaveOptions, SaveRequest};
//!
//! let saver = ImageSaver::new(SaveOptions::default());
//! let request = SaveRequest::new(
//!     InMemoryFrame::from_compressed(jpeg_bytes),
//!     "/data/photos/shot.jpg",
//!     3.0 / 4.0,
//!     LensFacing::Back,
//!     |outcome| println!("{:?}", outcome),
//! );
//! std::thread::spawn(move || saver.save(request));
//! ```

mod outcome;
mod output;
mod source;

pub use outcome::{ErrorCode, SaveError, SaveOutcome, IO_FAILURE_MESSAGE};
pub use output::{FileOpener, OutputOpener};
pub use source::{FrameSource, InMemoryFrame};

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, debug_span, error, info, warn};

use crate::config::SaveOptions;
use crate::decode::decode_frame;
use crate::encode::encode_image;
use crate::geometry::{plan_crop, LensFacing};
use crate::transform::apply_plan;
use source::SourceGuard;

/// Index of the plane holding the compressed image.
const PRIMARY_PLANE: usize = 0;

/// Continuation receiving the result of a save run.
pub type Completion = Box<dyn FnOnce(SaveOutcome) + Send>;

/// Everything needed to save one frame. Consumed by [`ImageSaver::save`].
///
/// The frame is owned by the request from construction on; dropping an
/// unsaved request releases it without calling the completion.
pub struct SaveRequest<S: FrameSource> {
    source: SourceGuard<S>,
    destination: PathBuf,
    aspect_ratio: f64,
    lens_facing: LensFacing,
    completion: Completion,
}

impl<S: FrameSource> SaveRequest<S> {
    /// Build a request.
    ///
    /// `aspect_ratio` is width / height of the upright output. It is checked
    /// when the request runs, not here.
    pub fn new<F>(
        source: S,
        destination: impl Into<PathBuf>,
        aspect_ratio: f64,
        lens_facing: LensFacing,
        completion: F,
    ) -> Self
    where
        F: FnOnce(SaveOutcome) + Send + 'static,
    {
        Self {
            source: SourceGuard::new(source),
            destination: destination.into(),
            aspect_ratio,
            lens_facing,
            completion: Box::new(completion),
        }
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    pub fn lens_facing(&self) -> LensFacing {
        self.lens_facing
    }
}

/// Runs save requests.
///
/// The saver holds no per-request state and can be shared between threads;
/// each request must carry its own frame and destination.
#[derive(Debug, Clone)]
pub struct ImageSaver<O: OutputOpener = FileOpener> {
    opener: O,
    options: SaveOptions,
}

impl ImageSaver<FileOpener> {
    /// Saver writing to the local filesystem.
    pub fn new(options: SaveOptions) -> Self {
        Self {
            opener: FileOpener::new(options.sync_on_close),
            options,
        }
    }
}

impl Default for ImageSaver<FileOpener> {
    fn default() -> Self {
        Self::new(SaveOptions::default())
    }
}

impl<O: OutputOpener> ImageSaver<O> {
    /// Saver writing through a custom output opener.
    pub fn with_opener(opener: O, options: SaveOptions) -> Self {
        Self { opener, options }
    }

    pub fn options(&self) -> &SaveOptions {
        &self.options
    }

    /// Run one request to completion.
    ///
    /// The frame is released before the completion runs, on every path. The
    /// completion is called exactly once. A failure to close the output
    /// stream never produces a second result: it is logged at error level
    /// with code `cameraAccess` and the result of the write stands.
    pub fn save<S: FrameSource>(&self, request: SaveRequest<S>) {
        let SaveRequest {
            source,
            destination,
            aspect_ratio,
            lens_facing,
            completion,
        } = request;

        let span = debug_span!(
            "save_frame",
            destination = %destination.display(),
            ?lens_facing,
            aspect_ratio
        );
        let _entered = span.enter();

        let result = self
            .render(&*source, aspect_ratio, lens_facing)
            .and_then(|jpeg| self.persist(&destination, &jpeg));
        drop(source);

        let outcome = match result {
            Ok(path) => {
                info!(path = %path.display(), "Frame saved");
                SaveOutcome::Success(path)
            }
            Err(err) => {
                warn!(code = %err.code(), error = %err, "Frame save failed");
                SaveOutcome::from(err)
            }
        };

        completion(outcome);
    }

    /// Decode, crop, orient and encode the frame.
    fn render<S: FrameSource>(
        &self,
        source: &S,
        aspect_ratio: f64,
        lens_facing: LensFacing,
    ) -> Result<Vec<u8>, SaveError> {
        if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
            return Err(SaveError::InvalidAspectRatio(aspect_ratio));
        }

        let bytes = source
            .plane(PRIMARY_PLANE)
            .ok_or(SaveError::MissingPlane(PRIMARY_PLANE))?;
        let decoded = decode_frame(bytes)?;
        debug!(
            width = decoded.width,
            height = decoded.height,
            compressed_len = bytes.len(),
            "Frame decoded"
        );

        let plan = plan_crop(decoded.width, decoded.height, aspect_ratio, lens_facing);
        debug!(
            crop_left = plan.crop_left,
            crop_top = plan.crop_top,
            crop_width = plan.crop_width,
            crop_height = plan.crop_height,
            rotation = plan.rotation.degrees(),
            mirror = plan.mirror_horizontal,
            "Crop planned"
        );

        let oriented = apply_plan(&decoded, &plan)?;
        Ok(encode_image(&oriented, self.options.jpeg_quality)?)
    }

    /// Write the encoded frame and return the absolute destination path.
    fn persist(&self, destination: &Path, bytes: &[u8]) -> Result<PathBuf, SaveError> {
        let mut stream = self.opener.open(destination)?;
        let written = stream.write_all(bytes);

        // The outcome is decided by the write; close failures are only logged.
        if let Err(err) = self.opener.close(stream) {
            error!(
                code = %ErrorCode::CameraAccess,
                error = %err,
                "Failed to close output stream"
            );
        }
        written?;

        debug!(bytes = bytes.len(), "Frame written");
        Ok(std::path::absolute(destination).unwrap_or_else(|_| destination.to_path_buf()))
    }
}
