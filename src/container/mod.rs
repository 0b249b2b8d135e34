//! The 6pack single-file archive container: magic, chunked layout, and a
//! pack/unpack pair built on top of the FastLZ codec and Adler-32
//! checksums.

pub mod error;
pub mod format;
pub mod pack;
pub mod unpack;

pub use error::ContainerError;
pub use format::{ChunkHeader, BLOCK_SIZE, MAGIC};
pub use pack::{pack_file, PackResult};
pub use unpack::{unpack_file, UnpackResult};
