//! Archive writer: packs a single file into a 6pack-style container.
//!
//! Equivalent to `pack_file`/`pack_file_compressed` in `6pack.c`.

use std::fs::File;
use std::io::{self, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::adler32;
use crate::codec;

use super::error::ContainerError;
use super::format::{
    ChunkHeader, BLOCK_SIZE, CHUNK_DATA, CHUNK_FILE_ENTRY, DATA_OPTION_COMPRESSED,
    DATA_OPTION_STORED, MAGIC, MIN_COMPRESS_BLOCK,
};

/// Byte and chunk counts from a completed pack operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PackResult {
    pub bytes_read: u64,
    pub bytes_written: u64,
    pub data_chunks: u32,
}

/// Packs `input_path` into a new archive at `output_path`.
///
/// The stored name is `input_path`'s file name component, matching
/// `6pack.c`'s `shown_name` (the path stripped to its basename before being
/// written into the file-entry chunk).
///
/// Equivalent to `pack_file_compressed`. Refuses to pack a file whose size
/// does not fit in the container's 32-bit size field
/// ([`ContainerError::FileTooLarge`]), rather than silently truncating it.
/// Also refuses (rather than overwriting or prompting) when `output_path`
/// already exists, and refuses to pack a file that already starts with the
/// archive magic — matching `6pack.c`'s `pack_file`/`detect_magic` guards,
/// with an explicit error in place of the C source's interactive prompt.
/// Returns [`ContainerError::SizeMismatch`] if fewer or more bytes were read
/// off `input_path` than `metadata` declared (the file changed size out from
/// under the packer).
pub fn pack_file(input_path: &Path, output_path: &Path) -> Result<PackResult, ContainerError> {
    if output_path.exists() {
        return Err(ContainerError::OutputExists);
    }

    let metadata = std::fs::metadata(input_path)?;
    let file_size = metadata.len();
    let file_size_u32: u32 = file_size
        .try_into()
        .map_err(|_| ContainerError::FileTooLarge)?;

    let shown_name = input_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input_path.to_string_lossy().into_owned());

    let mut input = File::open(input_path)?;
    if starts_with_magic(&mut input)? {
        return Err(ContainerError::AlreadyAnArchive);
    }

    let output = File::create(output_path)?;
    let mut writer = BufWriter::new(output);

    writer.write_all(&MAGIC)?;
    let mut bytes_written = MAGIC.len() as u64;
    bytes_written += write_file_entry_chunk(&mut writer, &shown_name, file_size_u32)?;

    let (data_written, data_chunks, bytes_read) = write_data_chunks(input, &mut writer)?;
    bytes_written += data_written;

    check_bytes_read(file_size_u32, bytes_read)?;

    writer.flush()?;

    Ok(PackResult {
        bytes_read,
        bytes_written,
        data_chunks,
    })
}

/// Writes the file-entry chunk (id [`CHUNK_FILE_ENTRY`]) and returns the
/// number of bytes written, including the chunk header.
///
/// Equivalent to the `buffer`/`shown_name` construction at the top of
/// `pack_file_compressed`: a fixed 10-byte prefix (4-byte size, 4 reserved
/// bytes for a 64-bit size this format never uses, 2-byte name length)
/// followed by the NUL-terminated name, checksummed with two incremental
/// Adler-32 calls.
fn write_file_entry_chunk<W: Write>(
    w: &mut W,
    shown_name: &str,
    file_size: u32,
) -> io::Result<u64> {
    let mut prefix = [0u8; 10];
    prefix[0..4].copy_from_slice(&file_size.to_le_bytes());
    // prefix[4..8] stays zero: this format only ever writes a 32-bit size.
    let name_len = (shown_name.len() + 1) as u16;
    prefix[8..10].copy_from_slice(&name_len.to_le_bytes());

    let mut name_bytes = shown_name.as_bytes().to_vec();
    name_bytes.push(0);

    let checksum = adler32::update(adler32::update(1, &prefix), &name_bytes);

    let payload_len = prefix.len() + name_bytes.len();
    let header = ChunkHeader {
        id: CHUNK_FILE_ENTRY,
        options: 0,
        size: payload_len as u32,
        checksum,
        extra: 0,
    };
    header.write_to(w)?;
    w.write_all(&prefix)?;
    w.write_all(&name_bytes)?;

    Ok(ChunkHeader::ENCODED_LEN as u64 + payload_len as u64)
}

/// Reads `input` in [`BLOCK_SIZE`] blocks, writing one data chunk
/// (id [`CHUNK_DATA`]) per block, and returns `(bytes_written,
/// chunk_count, bytes_read)`.
///
/// Equivalent to `pack_file_compressed`'s main read/compress/write loop.
/// Blocks under [`MIN_COMPRESS_BLOCK`] bytes are always stored raw
/// (`6pack.c`: "too small, don't bother to compress"); blocks at or above
/// that size are always compressed, even if the compressed form turns out
/// larger than the raw block — `pack_file_compressed`'s `case 1` branch has
/// no size comparison and takes the compressed output unconditionally.
/// Checksums are computed over the bytes actually written to the chunk —
/// the compressed bytes for a compressed chunk, the raw bytes for a stored
/// one — matching `update_adler32`'s two call sites in the real source.
fn write_data_chunks<R: Read, W: Write>(
    mut input: R,
    w: &mut W,
) -> io::Result<(u64, u32, u64)> {
    let mut buf = vec![0u8; BLOCK_SIZE];
    let mut bytes_written = 0u64;
    let mut bytes_read = 0u64;
    let mut chunk_count = 0u32;

    loop {
        let n = read_block(&mut input, &mut buf)?;
        if n == 0 {
            break;
        }
        bytes_read += n as u64;
        let block = &buf[..n];

        if n >= MIN_COMPRESS_BLOCK {
            let compressed = codec::compress_with_level(block, codec::Level::Level1);
            let checksum = adler32::checksum(&compressed);
            let header = ChunkHeader {
                id: CHUNK_DATA,
                options: DATA_OPTION_COMPRESSED,
                size: compressed.len() as u32,
                checksum,
                extra: n as u32,
            };
            header.write_to(w)?;
            w.write_all(&compressed)?;
            bytes_written += ChunkHeader::ENCODED_LEN as u64 + compressed.len() as u64;
            chunk_count += 1;
            continue;
        }

        let checksum = adler32::checksum(block);
        let header = ChunkHeader {
            id: CHUNK_DATA,
            options: DATA_OPTION_STORED,
            size: n as u32,
            checksum,
            extra: n as u32,
        };
        header.write_to(w)?;
        w.write_all(block)?;
        bytes_written += ChunkHeader::ENCODED_LEN as u64 + n as u64;
        chunk_count += 1;
    }

    Ok((bytes_written, chunk_count, bytes_read))
}

/// Confirms the number of bytes actually read while packing matches the
/// size declared by `std::fs::metadata` at the start of `pack_file` —
/// `6pack.c`'s `if(total_read != fsize)` check at the end of
/// `pack_file_compressed`.
fn check_bytes_read(declared: u32, actual: u64) -> Result<(), ContainerError> {
    if actual != declared as u64 {
        return Err(ContainerError::SizeMismatch {
            declared,
            actual,
        });
    }
    Ok(())
}

/// Peeks at `input`'s first 8 bytes and rewinds, reporting whether they
/// match the archive magic. Equivalent to `detect_magic`'s
/// read-then-`fseek`-back pattern.
fn starts_with_magic(input: &mut File) -> io::Result<bool> {
    let mut head = [0u8; MAGIC.len()];
    let n = read_block(input, &mut head)?;
    input.seek(SeekFrom::Start(0))?;
    Ok(n == MAGIC.len() && head == MAGIC)
}

/// Fills `buf` with up to `buf.len()` bytes, retrying on `Interrupted` and
/// returning fewer than `buf.len()` only at EOF.
fn read_block<R: Read>(r: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
