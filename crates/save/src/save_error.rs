// ---------------------------------------------------------------------------
// SaveError: error types for run export read/write
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors that can occur while writing or reading a run export.
#[derive(Debug)]
pub enum SaveError {
    /// I/O error (file not found, permission denied, disk full, etc.)
    Io(std::io::Error),
    /// Bitcode encoding failed.
    Encode(String),
    /// Bitcode decoding failed (corrupt or invalid payload).
    Decode(String),
    /// LZ4 decompression failed.
    Compression(String),
    /// The file does not start with a valid export header.
    InvalidHeader(String),
    /// The payload checksum does not match the header.
    ChecksumMismatch { expected: u32, found: u32 },
    /// Export format version is newer than this build supports.
    VersionMismatch { expected_max: u32, found: u32 },
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "I/O error: {e}"),
            SaveError::Encode(msg) => write!(f, "Encoding error: {msg}"),
            SaveError::Decode(msg) => write!(f, "Decoding error: {msg}"),
            SaveError::Compression(msg) => write!(f, "Decompression error: {msg}"),
            SaveError::InvalidHeader(msg) => write!(f, "Invalid export header: {msg}"),
            SaveError::ChecksumMismatch { expected, found } => write!(
                f,
                "Export is corrupted: checksum mismatch (expected {expected:#010X}, got {found:#010X})"
            ),
            SaveError::VersionMismatch {
                expected_max,
                found,
            } => write!(
                f,
                "Version mismatch: export is v{found}, but this build only supports up to v{expected_max}"
            ),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SaveError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<bitcode::Error> for SaveError {
    fn from(e: bitcode::Error) -> Self {
        SaveError::Decode(e.to_string())
    }
}

impl From<lz4_flex::block::DecompressError> for SaveError {
    fn from(e: lz4_flex::block::DecompressError) -> Self {
        SaveError::Compression(e.to_string())
    }
}
