//! End-to-end coverage of the FastLZ codec's public API: level auto-selection,
//! explicit level round-trips, and behavior on data shapes that stress the
//! match finder (long runs, far distances, incompressible noise).

use rand::prelude::*;
use sixpack::codec::{compress, compress_with_level, decompress, Level};

fn pseudo_random(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    thread_rng().fill(&mut buf[..]);
    buf
}

#[test]
fn auto_level_round_trips_small_and_large_inputs() {
    let small = b"the quick brown fox jumps over the lazy dog".repeat(10);
    let large = pseudo_random(200_000);

    for input in [small, large] {
        let compressed = compress(&input);
        let restored = decompress(&compressed, input.len()).unwrap();
        assert_eq!(restored, input);
    }
}

#[test]
fn explicit_levels_round_trip_mixed_content() {
    let mut input = Vec::new();
    input.extend(std::iter::repeat(b'x').take(10_000));
    input.extend(pseudo_random(5_000));
    input.extend(std::iter::repeat(b'y').take(300));

    for level in [Level::Level1, Level::Level2] {
        let compressed = compress_with_level(&input, level);
        assert_eq!(compressed[0] >> 5, if level == Level::Level1 { 0 } else { 1 });
        let restored = decompress(&compressed, input.len()).unwrap();
        assert_eq!(restored, input);
    }
}

#[test]
fn long_runs_exercise_overlong_match_chaining() {
    let input = vec![0x42u8; 500_000];
    let compressed = compress_with_level(&input, Level::Level2);
    assert!(compressed.len() < input.len() / 100);
    let restored = decompress(&compressed, input.len()).unwrap();
    assert_eq!(restored, input);
}

#[test]
fn incompressible_data_still_round_trips() {
    let input = pseudo_random(100_000);
    for level in [Level::Level1, Level::Level2] {
        let compressed = compress_with_level(&input, level);
        let restored = decompress(&compressed, input.len()).unwrap();
        assert_eq!(restored, input);
    }
}

#[test]
fn empty_input_round_trips_to_empty_output() {
    let compressed = compress(&[]);
    assert!(compressed.is_empty());
    assert_eq!(decompress(&compressed, 0).unwrap(), Vec::<u8>::new());
}
