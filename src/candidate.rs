use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// Opaque "read this file as text" capability.
///
/// Implementations must fail on data that is not valid UTF-8 instead of
/// decoding it lossily; the sensitive scanner relies on that to skip
/// binary files.
pub trait ContentSource: Send + Sync {
    fn read_text(&self) -> io::Result<String>;
}

/// Reads from a path on disk.
pub struct FsSource {
    path: PathBuf,
}

impl FsSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FsSource { path: path.into() }
    }
}

impl ContentSource for FsSource {
    fn read_text(&self) -> io::Result<String> {
        let bytes = fs::read(&self.path)?;
        decode(bytes)
    }
}

/// Bytes held in memory. Used by library callers that already have the data.
pub struct MemorySource {
    bytes: Vec<u8>,
}

impl MemorySource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        MemorySource {
            bytes: bytes.into(),
        }
    }
}

impl ContentSource for MemorySource {
    fn read_text(&self) -> io::Result<String> {
        decode(self.bytes.clone())
    }
}

fn decode(bytes: Vec<u8>) -> io::Result<String> {
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[derive(Clone)]
pub struct CandidateFile {
    pub path: String,
    pub size: u64,
    source: Arc<dyn ContentSource>,
}

impl CandidateFile {
    pub fn new(path: impl Into<String>, size: u64, source: Arc<dyn ContentSource>) -> Self {
        CandidateFile {
            path: path.into(),
            size,
            source,
        }
    }

    pub fn from_fs(path: impl Into<String>, size: u64, on_disk: impl Into<PathBuf>) -> Self {
        Self::new(path, size, Arc::new(FsSource::new(on_disk)))
    }

    pub fn in_memory(path: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        let bytes = bytes.into();
        let size = bytes.len() as u64;
        Self::new(path, size, Arc::new(MemorySource::new(bytes)))
    }

    pub fn read_text(&self) -> io::Result<String> {
        self.source.read_text()
    }

    /// Lowercased final path segment.
    pub fn basename(&self) -> String {
        basename(&self.path).to_lowercase()
    }
}

impl fmt::Debug for CandidateFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CandidateFile")
            .field("path", &self.path)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

pub(crate) fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_size_and_text() {
        let f = CandidateFile::in_memory("proj/src/main.rs", "fn main() {}");
        assert_eq!(f.size, 12);
        assert_eq!(f.read_text().unwrap(), "fn main() {}");
    }

    #[test]
    fn test_invalid_utf8_fails_to_decode() {
        let f = CandidateFile::in_memory("logo.bin", vec![0xff, 0xfe, 0x00, 0x80]);
        let err = f.read_text().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_basename_is_lowercased() {
        let f = CandidateFile::in_memory("proj/Config/Settings.JSON", "");
        assert_eq!(f.basename(), "settings.json");
    }

    #[test]
    fn test_fs_source_missing_file() {
        let f = CandidateFile::from_fs("x.txt", 0, "/definitely/not/here.txt");
        assert_eq!(f.read_text().unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
