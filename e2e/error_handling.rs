//! End-to-end coverage of error paths across the codec and container
//! layers: corrupt/truncated inputs must return typed errors, never panic.

use sixpack::codec::CodecError;
use sixpack::container::ContainerError;
use sixpack::{decompress, pack_file, unpack_file};

#[test]
fn decompress_rejects_an_unknown_level_marker() {
    let garbage = [0xFFu8, 0x00, 0x00];
    assert_eq!(decompress(&garbage, 16), Err(CodecError::UnknownLevel));
}

#[test]
fn decompress_rejects_a_truncated_match_header() {
    // A Level 1 match opcode (top bits != 0) with no following bytes.
    let truncated = [0xA0u8];
    assert!(decompress(&truncated, 16).is_err());
}

#[test]
fn decompress_rejects_a_reference_before_the_output_start() {
    // Level 1 long-match opcode claiming a distance larger than anything
    // decoded so far.
    let bogus = [0xE0u8, 0x00, 0xFF];
    assert!(matches!(
        decompress(&bogus, 16),
        Err(CodecError::ReferenceUnderflow) | Err(CodecError::TruncatedInput)
    ));
}

#[test]
fn unpacking_a_file_without_the_magic_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let bogus_path = dir.path().join("bogus.6pk");
    std::fs::write(&bogus_path, b"definitely not a 6pack archive").unwrap();

    let out_path = dir.path().join("out.bin");
    let err = unpack_file(&bogus_path, &out_path).unwrap_err();
    assert!(matches!(err, ContainerError::NotAnArchive));
}

#[test]
fn unpacking_a_file_with_a_corrupted_data_chunk_fails_checksum() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("source.bin");
    std::fs::write(&input_path, vec![5u8; 10_000]).unwrap();
    let archive_path = dir.path().join("source.6pk");
    pack_file(&input_path, &archive_path).unwrap();

    let mut bytes = std::fs::read(&archive_path).unwrap();
    let mid = bytes.len() / 2;
    bytes[mid] ^= 0xFF;
    std::fs::write(&archive_path, &bytes).unwrap();

    let out_path = dir.path().join("out.bin");
    let err = unpack_file(&archive_path, &out_path).unwrap_err();
    assert!(matches!(err, ContainerError::ChecksumMismatch { .. }));
}

#[test]
fn unpacking_a_truncated_archive_reports_truncation_or_checksum_failure() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("source.bin");
    std::fs::write(&input_path, vec![9u8; 10_000]).unwrap();
    let archive_path = dir.path().join("source.6pk");
    pack_file(&input_path, &archive_path).unwrap();

    let mut bytes = std::fs::read(&archive_path).unwrap();
    bytes.truncate(bytes.len() - 5);
    std::fs::write(&archive_path, &bytes).unwrap();

    let out_path = dir.path().join("out.bin");
    let err = unpack_file(&archive_path, &out_path).unwrap_err();
    assert!(matches!(
        err,
        ContainerError::Truncated | ContainerError::ChecksumMismatch { .. } | ContainerError::Io(_)
    ));
}

#[test]
fn packing_into_an_existing_output_path_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("source.bin");
    std::fs::write(&input_path, vec![1u8; 100]).unwrap();

    let output_path = dir.path().join("already-there.6pk");
    std::fs::write(&output_path, b"pre-existing contents").unwrap();

    let err = pack_file(&input_path, &output_path).unwrap_err();
    assert!(matches!(err, ContainerError::OutputExists));
    // The pre-existing output must be left untouched.
    assert_eq!(std::fs::read(&output_path).unwrap(), b"pre-existing contents");
}

#[test]
fn packing_a_file_that_is_already_an_archive_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("source.bin");
    std::fs::write(&input_path, vec![2u8; 500]).unwrap();

    let archive_path = dir.path().join("source.6pk");
    pack_file(&input_path, &archive_path).unwrap();

    let repacked_path = dir.path().join("source.6pk.6pk");
    let err = pack_file(&archive_path, &repacked_path).unwrap_err();
    assert!(matches!(err, ContainerError::AlreadyAnArchive));
    assert!(!repacked_path.exists());
}

#[test]
fn packing_a_nonexistent_input_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist.bin");
    let output = dir.path().join("out.6pk");
    let err = pack_file(&missing, &output).unwrap_err();
    assert!(matches!(err, ContainerError::Io(_)));
}
