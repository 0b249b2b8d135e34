//! Level selection and marker-based decode dispatch.
//!
//! Equivalent to `fastlz_compress`/`fastlz_decompress` in `fastlz.c`, which
//! pick between the two level-specific entry points based on an explicit
//! `level` argument (compress) or the stream's marker bit (decompress).

use super::constants::LEVEL_AUTO_THRESHOLD;
use super::error::CodecError;
use super::{level1, level2};

/// Which codec variant produced (or should decode) a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Short-distance codec: matches within 8192 bytes, lengths to 264.
    Level1,
    /// Extended-distance codec: far matches to ~73726, unbounded length.
    Level2,
}

/// Compresses `input`, choosing a level explicitly.
///
/// Equivalent to `fastlz_compress_level` (called with `level` fixed rather
/// than derived).
pub fn compress_with_level(input: &[u8], level: Level) -> Vec<u8> {
    let mut out = Vec::new();
    match level {
        Level::Level1 => level1::compress(input, &mut out),
        Level::Level2 => level2::compress(input, &mut out),
    }
    out
}

/// Compresses `input`, selecting Level 2 for inputs at or above
/// [`LEVEL_AUTO_THRESHOLD`] and Level 1 otherwise.
///
/// Equivalent to `fastlz_compress`'s `length < 65536 ? 1 : 2` heuristic.
pub fn compress(input: &[u8]) -> Vec<u8> {
    let level = if input.len() < LEVEL_AUTO_THRESHOLD {
        Level::Level1
    } else {
        Level::Level2
    };
    compress_with_level(input, level)
}

/// Decompresses `input`, dispatching on the level marker in its first byte.
///
/// Equivalent to `fastlz_decompress`: a first byte whose top 3 bits are `0`
/// selects Level 1, `1` selects Level 2; any other value is rejected
/// (`fastlz_decompress` in `fastlz.c` only distinguishes 0 vs. non-zero, but
/// the spec's `[CODEC]` module additionally rejects a marker other than 0/1,
/// which this port honors since every marker this crate ever writes is 0 or
/// 1 and any other value indicates a corrupt or foreign stream).
pub fn decompress(input: &[u8], max_output: usize) -> Result<Vec<u8>, CodecError> {
    if input.is_empty() {
        return Ok(Vec::new());
    }
    match input[0] >> 5 {
        0 => level1::decompress(input, max_output),
        1 => level2::decompress(input, max_output),
        _ => Err(CodecError::UnknownLevel),
    }
}
