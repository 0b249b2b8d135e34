//! Errors from packing or unpacking a 6pack-style archive.

use std::fmt;
use std::io;

use crate::codec::CodecError;

#[derive(Debug)]
pub enum ContainerError {
    /// The input stream does not start with the archive magic.
    NotAnArchive,
    /// `pack_file`'s input already starts with the archive magic — packing
    /// an archive into another archive is refused rather than nested.
    AlreadyAnArchive,
    /// The destination path already exists; the port refuses rather than
    /// overwriting or prompting interactively (see `DESIGN.md`).
    OutputExists,
    /// The input file's size does not fit in the container's 32-bit size
    /// field; the port refuses rather than silently truncating it.
    FileTooLarge,
    /// The number of bytes actually read while packing did not match the
    /// file size declared in the file-entry chunk (the input changed size
    /// out from under the packer).
    SizeMismatch { declared: u32, actual: u64 },
    /// A chunk's stored checksum does not match the checksum computed over
    /// its actual bytes.
    ChecksumMismatch { chunk_id: u16 },
    /// A chunk header named an id this reader does not understand.
    UnknownChunk { chunk_id: u16 },
    /// The archive ended in the middle of a chunk's payload.
    Truncated,
    /// A data chunk's `options` field was neither stored nor compressed.
    InvalidOptions { options: u16 },
    Codec(CodecError),
    Io(io::Error),
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerError::NotAnArchive => write!(f, "not a 6pack archive"),
            ContainerError::AlreadyAnArchive => {
                write!(f, "input is already a 6pack archive")
            }
            ContainerError::OutputExists => write!(f, "output file already exists"),
            ContainerError::FileTooLarge => {
                write!(f, "file too large for a 32-bit container size field")
            }
            ContainerError::SizeMismatch { declared, actual } => write!(
                f,
                "read {actual} bytes while packing, but declared size was {declared} bytes"
            ),
            ContainerError::ChecksumMismatch { chunk_id } => {
                write!(f, "checksum mismatch in chunk {chunk_id}")
            }
            ContainerError::UnknownChunk { chunk_id } => {
                write!(f, "unknown chunk id {chunk_id}")
            }
            ContainerError::Truncated => write!(f, "archive truncated"),
            ContainerError::InvalidOptions { options } => {
                write!(f, "invalid data chunk options {options}")
            }
            ContainerError::Codec(e) => write!(f, "{e}"),
            ContainerError::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ContainerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContainerError::Codec(e) => Some(e),
            ContainerError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ContainerError {
    fn from(e: io::Error) -> Self {
        ContainerError::Io(e)
    }
}

impl From<CodecError> for ContainerError {
    fn from(e: CodecError) -> Self {
        ContainerError::Codec(e)
    }
}
