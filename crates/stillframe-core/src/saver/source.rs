//! Captured frame handles and their release guard.

use std::ops::Deref;

use tracing::trace;

/// A compressed frame handed over by the capture pipeline.
///
/// The frame exposes one or more planar buffers; only the first is consumed.
/// `close` returns the frame to its producer and is called exactly once by
/// the saver, whatever the outcome of the run.
pub trait FrameSource {
    /// Buffer of the plane at `index`, if present.
    fn plane(&self, index: usize) -> Option<&[u8]>;

    /// Release the frame.
    fn close(&mut self);
}

/// A frame whose planes live in owned memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFrame {
    planes: Vec<Vec<u8>>,
}

impl InMemoryFrame {
    pub fn new(planes: Vec<Vec<u8>>) -> Self {
        Self { planes }
    }

    /// Frame with a single plane holding a compressed image.
    pub fn from_compressed(bytes: Vec<u8>) -> Self {
        Self::new(vec![bytes])
    }

    /// True once the frame has been closed.
    pub fn is_closed(&self) -> bool {
        self.planes.is_empty()
    }
}

impl FrameSource for InMemoryFrame {
    fn plane(&self, index: usize) -> Option<&[u8]> {
        self.planes.get(index).map(Vec::as_slice)
    }

    fn close(&mut self) {
        self.planes = Vec::new();
    }
}

/// Owns a frame and closes it when dropped.
///
/// Dropping is the only way the frame gets closed, so every exit path of a
/// run, including a request that is never executed, releases it once.
#[derive(Debug)]
pub(crate) struct SourceGuard<S: FrameSource> {
    source: S,
}

impl<S: FrameSource> SourceGuard<S> {
    pub(crate) fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: FrameSource> Deref for SourceGuard<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.source
    }
}

impl<S: FrameSource> Drop for SourceGuard<S> {
    fn drop(&mut self) {
        self.source.close();
        trace!("Source frame released");
    }
}
