//! FastLZ byte-aligned LZ77 codec.
//!
//! Two interchangeable levels share one wire format family, distinguished
//! by the top 3 bits of the first compressed byte (`0` = Level 1, `1` =
//! Level 2). See `dispatch` for level selection and `level1`/`level2` for
//! the per-level compressors and decoders.

mod constants;
pub mod dispatch;
pub mod error;
mod hash;
mod level1;
mod level2;

pub use dispatch::{compress, compress_with_level, decompress, Level};
pub use error::CodecError;
