//! A byte-aligned LZ77-family compression codec (FastLZ Level 1 / Level 2)
//! and a minimal single-file archive container built on top of it.

pub mod adler32;
pub mod cli;
pub mod codec;
pub mod container;

pub use codec::{compress, compress_with_level, decompress, CodecError, Level};
pub use container::{pack_file, unpack_file, ContainerError, PackResult, UnpackResult};
