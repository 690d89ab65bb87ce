// ---------------------------------------------------------------------------
// file_header – Run export header with magic bytes, version, and checksum
// ---------------------------------------------------------------------------
//
// Header format (24 bytes, fixed-size, little-endian):
//   [0..4]   Magic bytes: "FERL" (0x4645524C)
//   [4..8]   Format version (u32)
//   [8..12]  Flags (u32: bit 0 = lz4 compressed)
//   [12..20] Uncompressed payload size (u64)
//   [20..24] xxHash32 checksum of the payload (everything after the header)
//
// On write: encode RunExport -> compress -> prepend header (checksum of stored bytes)
// On read: check magic -> check version -> validate checksum -> strip header

use xxhash_rust::xxh32::xxh32;

use crate::save_error::SaveError;

/// Magic bytes identifying a run export.
pub const MAGIC: [u8; 4] = *b"FERL";

/// Size of the file header in bytes.
pub const HEADER_SIZE: usize = 24;

/// Current export format version.
pub const FORMAT_VERSION: u32 = 1;

/// Payload is lz4 block-compressed with a prepended size.
pub const FLAG_COMPRESSED: u32 = 1 << 0;

/// Seed for xxHash32 checksum.
const XXHASH_SEED: u32 = 0;

/// Parsed file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    pub format_version: u32,
    pub flags: u32,
    pub uncompressed_size: u64,
    pub checksum: u32,
}

impl FileHeader {
    /// Header for `payload` as stored on disk.
    pub fn new(payload: &[u8], flags: u32, uncompressed_size: u64) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            flags,
            uncompressed_size,
            checksum: xxh32(payload, XXHASH_SEED),
        }
    }

    pub fn is_compressed(&self) -> bool {
        self.flags & FLAG_COMPRESSED != 0
    }
}

/// Prepend a header to the stored payload.
///
/// Returns bytes: [header (24 bytes)] ++ [payload].
pub fn wrap_with_header(payload: &[u8], flags: u32, uncompressed_size: u64) -> Vec<u8> {
    let header = FileHeader::new(payload, flags, uncompressed_size);
    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());

    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&header.format_version.to_le_bytes());
    out.extend_from_slice(&header.flags.to_le_bytes());
    out.extend_from_slice(&header.uncompressed_size.to_le_bytes());
    out.extend_from_slice(&header.checksum.to_le_bytes());

    out.extend_from_slice(payload);
    out
}

/// Parse and validate the header, returning it with the payload slice.
///
/// # Errors
///
/// - `InvalidHeader` if the magic bytes are missing or the file is too short
/// - `VersionMismatch` if the export comes from a newer format version
/// - `ChecksumMismatch` if the payload was modified or damaged
pub fn unwrap_header(bytes: &[u8]) -> Result<(FileHeader, &[u8]), SaveError> {
    if bytes.len() < MAGIC.len() || bytes[..4] != MAGIC {
        return Err(SaveError::InvalidHeader(
            "missing FERL magic bytes".to_string(),
        ));
    }

    if bytes.len() < HEADER_SIZE {
        return Err(SaveError::InvalidHeader(format!(
            "file is too short ({} bytes, need at least {HEADER_SIZE} for header)",
            bytes.len()
        )));
    }

    let format_version = read_u32(bytes, 4);
    let flags = read_u32(bytes, 8);
    let mut size_bytes = [0u8; 8];
    size_bytes.copy_from_slice(&bytes[12..20]);
    let uncompressed_size = u64::from_le_bytes(size_bytes);
    let checksum = read_u32(bytes, 20);

    if format_version > FORMAT_VERSION {
        return Err(SaveError::VersionMismatch {
            expected_max: FORMAT_VERSION,
            found: format_version,
        });
    }

    let payload = &bytes[HEADER_SIZE..];
    let computed = xxh32(payload, XXHASH_SEED);
    if computed != checksum {
        return Err(SaveError::ChecksumMismatch {
            expected: checksum,
            found: computed,
        });
    }

    Ok((
        FileHeader {
            format_version,
            flags,
            uncompressed_size,
            checksum,
        },
        payload,
    ))
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}
