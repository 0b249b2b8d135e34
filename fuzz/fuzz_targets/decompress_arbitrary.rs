#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Feed arbitrary bytes through the codec decompressor at a few output
    // caps. Err results are expected and fine; what we verify is no panics,
    // no out-of-bounds reads/writes, and no overflow.

    let _ = sixpack::decompress(data, 0);
    let _ = sixpack::decompress(data, 4096);

    if !data.is_empty() {
        let _ = sixpack::decompress(data, data.len());
    }

    // Cap at 1 MiB so the fuzzer doesn't OOM on tiny inputs claiming huge
    // output via the gamma-chained Level 2 length extension.
    let large = (data.len().saturating_mul(255)).min(1 << 20);
    let _ = sixpack::decompress(data, large);
});
