//! Decompression error taxonomy.
//!
//! A manual enum with a manual `Display`, matching
//! `examples/jafreck-lz4r/src/block/decompress_core.rs`'s `DecompressError`
//! rather than reaching for `thiserror` inside the library itself.

use std::fmt;

/// Why a compressed stream was rejected. Every variant corresponds to a
/// bounds or format check the decoder performs before it would otherwise
/// read or write out of range; the decoder never panics in place of
/// returning one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// The next literal run or match copy would write past `max_output`.
    OutputOverflow,
    /// A match back-reference points before the start of decoded output.
    ReferenceUnderflow,
    /// A literal run or match header calls for more input bytes than
    /// remain.
    TruncatedInput,
    /// The first byte's top 3 bits select neither Level 1 nor Level 2.
    UnknownLevel,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            CodecError::OutputOverflow => "decompressed output exceeds max_output",
            CodecError::ReferenceUnderflow => "match reference precedes start of output",
            CodecError::TruncatedInput => "compressed input ends before an opcode completes",
            CodecError::UnknownLevel => "first byte does not select a known codec level",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for CodecError {}
