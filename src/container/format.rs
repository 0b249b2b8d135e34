//! On-disk layout of a 6pack-style single-file archive.
//!
//! Equivalent to the constants and `write_chunk_header`/`detect_magic` in
//! `6pack.c`.

use std::io::{self, Read, Write};

/// 8-byte magic identifying a 6pack archive (`sixpack_magic` in `6pack.c`).
/// The non-ASCII lead byte and CR/LF/EOF trailer follow the same
/// corruption-detecting convention as the PNG signature.
pub const MAGIC: [u8; 8] = [137, b'6', b'P', b'K', 13, 10, 26, 10];

/// Uncompressed bytes read per block before chunking
/// (`BLOCK_SIZE` in `6pack.c`: `2 * 64 * 1024`).
pub const BLOCK_SIZE: usize = 2 * 64 * 1024;

/// Blocks smaller than this are always stored raw rather than compressed
/// (`6pack.c`: "too small, don't bother to compress").
pub const MIN_COMPRESS_BLOCK: usize = 32;

/// Chunk id for a file-entry header (name + size).
pub const CHUNK_FILE_ENTRY: u16 = 1;
/// Chunk id for one block of file data.
pub const CHUNK_DATA: u16 = 17;

/// Data-chunk `options`: block stored without compression.
pub const DATA_OPTION_STORED: u16 = 0;
/// Data-chunk `options`: block is FastLZ Level-1 compressed.
pub const DATA_OPTION_COMPRESSED: u16 = 1;

/// A chunk's 16-byte little-endian header.
///
/// Equivalent to the `buffer[16]` layout built by `write_chunk_header`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    pub id: u16,
    pub options: u16,
    pub size: u32,
    pub checksum: u32,
    pub extra: u32,
}

impl ChunkHeader {
    pub const ENCODED_LEN: usize = 16;

    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let mut buf = [0u8; Self::ENCODED_LEN];
        buf[0..2].copy_from_slice(&self.id.to_le_bytes());
        buf[2..4].copy_from_slice(&self.options.to_le_bytes());
        buf[4..8].copy_from_slice(&self.size.to_le_bytes());
        buf[8..12].copy_from_slice(&self.checksum.to_le_bytes());
        buf[12..16].copy_from_slice(&self.extra.to_le_bytes());
        w.write_all(&buf)
    }

    pub fn read_from<R: Read>(r: &mut R) -> io::Result<Option<Self>> {
        let mut buf = [0u8; Self::ENCODED_LEN];
        match read_exact_or_eof(r, &mut buf)? {
            false => Ok(None),
            true => Ok(Some(ChunkHeader {
                id: u16::from_le_bytes([buf[0], buf[1]]),
                options: u16::from_le_bytes([buf[2], buf[3]]),
                size: u32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]),
                checksum: u32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]),
                extra: u32::from_le_bytes([buf[12], buf[13], buf[14], buf[15]]),
            })),
        }
    }
}

/// Reads exactly `buf.len()` bytes, or reports clean EOF if nothing at all
/// could be read before the stream ended. A partial read (EOF mid-header)
/// is a genuine I/O error, not a clean end-of-archive.
fn read_exact_or_eof<R: Read>(r: &mut R, buf: &mut [u8]) -> io::Result<bool> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    if filled == 0 {
        Ok(false)
    } else if filled == buf.len() {
        Ok(true)
    } else {
        Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "chunk header truncated",
        ))
    }
}

/// Returns `true` if `r`'s next 8 bytes are the archive magic, rewinding
/// consumption by reading through a peekable buffer the caller supplies.
///
/// Equivalent to `detect_magic`, minus the C version's `fseek` rewind: Rust
/// callers pass a `BufReader` and check this before consuming anything else,
/// rather than relying on seek-and-reread.
pub fn magic_matches(buf: &[u8; 8]) -> bool {
    *buf == MAGIC
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magic_is_eight_bytes_with_png_style_signature() {
        assert_eq!(MAGIC.len(), 8);
        assert_eq!(MAGIC[0], 137);
        assert_eq!(&MAGIC[1..4], b"6PK");
    }

    #[test]
    fn chunk_header_round_trips() {
        let h = ChunkHeader {
            id: CHUNK_DATA,
            options: DATA_OPTION_COMPRESSED,
            size: 12345,
            checksum: 0xDEADBEEF,
            extra: BLOCK_SIZE as u32,
        };
        let mut buf = Vec::new();
        h.write_to(&mut buf).unwrap();
        assert_eq!(buf.len(), ChunkHeader::ENCODED_LEN);
        let mut cursor = &buf[..];
        let read_back = ChunkHeader::read_from(&mut cursor).unwrap().unwrap();
        assert_eq!(read_back, h);
    }

    #[test]
    fn read_from_empty_stream_is_clean_eof() {
        let mut cursor: &[u8] = &[];
        assert!(ChunkHeader::read_from(&mut cursor).unwrap().is_none());
    }

    #[test]
    fn read_from_truncated_stream_is_an_error() {
        let mut cursor: &[u8] = &[1, 2, 3];
        assert!(ChunkHeader::read_from(&mut cursor).is_err());
    }

    #[test]
    fn magic_matches_rejects_corrupt_signature() {
        let mut corrupt = MAGIC;
        corrupt[3] = b'X';
        assert!(!magic_matches(&corrupt));
        assert!(magic_matches(&MAGIC));
    }
}
