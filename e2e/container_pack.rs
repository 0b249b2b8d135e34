//! End-to-end coverage of packing and unpacking whole files through the
//! 6pack container, using real temporary files rather than in-memory
//! buffers.

use rand::prelude::*;
use sixpack::container::format::MAGIC;
use sixpack::{pack_file, unpack_file};

fn pseudo_random(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    thread_rng().fill(&mut buf[..]);
    buf
}

#[test]
fn pack_unpack_round_trips_a_multi_block_file() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("payload.bin");
    let content = pseudo_random(300_000);
    std::fs::write(&input_path, &content).unwrap();

    let archive_path = dir.path().join("payload.6pk");
    let pack_result = pack_file(&input_path, &archive_path).unwrap();
    assert_eq!(pack_result.bytes_read, content.len() as u64);
    assert!(pack_result.data_chunks >= 1);

    let archive_bytes = std::fs::read(&archive_path).unwrap();
    assert_eq!(&archive_bytes[0..8], &MAGIC);

    let restored_path = dir.path().join("restored.bin");
    let unpack_result = unpack_file(&archive_path, &restored_path).unwrap();
    assert_eq!(unpack_result.stored_name, "payload.bin");
    assert_eq!(unpack_result.original_size, content.len() as u64);

    let restored = std::fs::read(&restored_path).unwrap();
    assert_eq!(restored, content);
}

#[test]
fn pack_unpack_round_trips_highly_compressible_content() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("log.txt");
    let line = "2026-07-28 INFO request handled ok\n";
    let content = line.repeat(20_000);
    std::fs::write(&input_path, &content).unwrap();

    let archive_path = dir.path().join("log.6pk");
    pack_file(&input_path, &archive_path).unwrap();

    let archive_len = std::fs::metadata(&archive_path).unwrap().len();
    assert!((archive_len as usize) < content.len() / 10);

    let restored_path = dir.path().join("log.restored");
    unpack_file(&archive_path, &restored_path).unwrap();
    let restored = std::fs::read(&restored_path).unwrap();
    assert_eq!(restored, content.as_bytes());
}

#[test]
fn pack_unpack_round_trips_an_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("empty.bin");
    std::fs::write(&input_path, []).unwrap();

    let archive_path = dir.path().join("empty.6pk");
    let pack_result = pack_file(&input_path, &archive_path).unwrap();
    assert_eq!(pack_result.bytes_read, 0);
    assert_eq!(pack_result.data_chunks, 0);

    let restored_path = dir.path().join("empty.restored");
    let unpack_result = unpack_file(&archive_path, &restored_path).unwrap();
    assert_eq!(unpack_result.original_size, 0);
    assert_eq!(std::fs::read(&restored_path).unwrap(), Vec::<u8>::new());
}

#[test]
fn pack_preserves_only_the_file_name_not_the_full_path() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("nested");
    std::fs::create_dir(&nested).unwrap();
    let input_path = nested.join("inner.dat");
    std::fs::write(&input_path, b"hello").unwrap();

    let archive_path = dir.path().join("inner.6pk");
    pack_file(&input_path, &archive_path).unwrap();

    let restored_path = dir.path().join("inner.restored");
    let result = unpack_file(&archive_path, &restored_path).unwrap();
    assert_eq!(result.stored_name, "inner.dat");
}
