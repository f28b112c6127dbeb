//! Output stream creation for saved frames.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Opens and closes the stream a frame is written to.
///
/// Closing is explicit so that close failures can be observed separately
/// from write failures.
pub trait OutputOpener {
    type Stream: Write;

    /// Open `path` for writing, truncating or creating it.
    fn open(&self, path: &Path) -> io::Result<Self::Stream>;

    /// Flush and close a stream returned by [`open`](Self::open).
    fn close(&self, stream: Self::Stream) -> io::Result<()>;
}

/// Writes frames to the local filesystem.
#[derive(Debug, Clone, Copy)]
pub struct FileOpener {
    sync_on_close: bool,
}

impl FileOpener {
    pub fn new(sync_on_close: bool) -> Self {
        Self { sync_on_close }
    }
}

impl Default for FileOpener {
    fn default() -> Self {
        Self::new(true)
    }
}

impl OutputOpener for FileOpener {
    type Stream = File;

    fn open(&self, path: &Path) -> io::Result<File> {
        File::create(path)
    }

    fn close(&self, mut stream: File) -> io::Result<()> {
        stream.flush()?;
        if self.sync_on_close {
            stream.sync_all()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_open_creates_and_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.jpg");
        fs::write(&path, b"previous contents that are longer").unwrap();

        let opener = FileOpener::default();
        let mut stream = opener.open(&path).unwrap();
        stream.write_all(b"new").unwrap();
        opener.close(stream).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn test_open_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, b"").unwrap();

        let result = FileOpener::new(false).open(&blocker.join("frame.jpg"));
        assert!(result.is_err());
    }
}
