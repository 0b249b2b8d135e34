//! Level 1: short-distance codec (match distances ≤ 8192, lengths ≤ 264).
//!
//! Equivalent to `fastlz1_compress`/`fastlz1_decompress` in `fastlz.c`.

use super::constants::{MAX_COPY, MAX_L1_DISTANCE, MAX_LEN};
use super::error::CodecError;
use super::hash::HashTable;

/// Appends the Level-1 compressed encoding of `input` to `out`.
///
/// Equivalent to `fastlz1_compress`. `out` is not cleared first so callers
/// (the dispatcher) can prepend nothing and simply take ownership of a
/// fresh buffer; in practice every caller passes an empty `out`.
pub(crate) fn compress(input: &[u8], out: &mut Vec<u8>) {
    let n = input.len();
    if n == 0 {
        return;
    }
    if n < 4 {
        out.push((n - 1) as u8);
        out.extend_from_slice(input);
        return;
    }

    let mut table = HashTable::new();
    let ip_bound = n - 2;
    let ip_limit = n.saturating_sub(13);

    out.push(31);
    out.push(input[0]);
    out.push(input[1]);
    let mut copy: usize = 2;
    let mut ip: usize = 2;

    while ip < ip_limit {
        let anchor = ip;
        let candidate = table.probe_and_insert(input, ip);
        let distance = anchor - candidate;

        let is_match = distance != 0
            && distance < MAX_L1_DISTANCE
            && input[candidate] == input[ip]
            && input[candidate + 1] == input[ip + 1]
            && input[candidate + 2] == input[ip + 2];

        if !is_match {
            out.push(input[anchor]);
            ip = anchor + 1;
            copy += 1;
            if copy == MAX_COPY {
                copy = 0;
                out.push(31);
            }
            continue;
        }

        let mut mref = candidate + 3;
        let mut mip = ip + 3;
        let is_run = distance == 1;
        if is_run {
            let x = input[mip - 1];
            while mip < ip_bound && input[mref] == x {
                mref += 1;
                mip += 1;
            }
        } else {
            while mip < ip_bound && input[mref] == input[mip] {
                mref += 1;
                mip += 1;
            }
        }
        ip = mip;

        close_literal_run(out, copy);
        copy = 0;

        // Length is biased: an encoded value of 1 means a 3-byte match.
        let full_len = ip - anchor;
        let mut len = full_len - 2;
        let distance = distance - 1;
        let dist_hi = ((distance >> 8) & 0x1F) as u8;
        let dist_lo = (distance & 0xFF) as u8;

        if len > MAX_LEN - 2 {
            while len > MAX_LEN - 2 {
                out.push((7 << 5) | dist_hi);
                out.push((MAX_LEN - 2 - 7 - 2) as u8);
                out.push(dist_lo);
                len -= MAX_LEN - 2;
            }
        }
        if len < 7 {
            out.push(((len as u8) << 5) | dist_hi);
            out.push(dist_lo);
        } else {
            out.push((7 << 5) | dist_hi);
            out.push((len - 7) as u8);
            out.push(dist_lo);
        }

        // Hash the match's last two bytes so future probes can reach them.
        let mut hpos = ip - 2;
        table.insert(input, hpos);
        hpos += 1;
        table.insert(input, hpos);

        out.push(31);
    }

    while ip < n {
        out.push(input[ip]);
        ip += 1;
        copy += 1;
        if copy == MAX_COPY {
            copy = 0;
            out.push(31);
        }
    }
    close_literal_run(out, copy);
}

/// Fixes up the pending literal-run prefix byte, or drops it if it was
/// never used. Shared by the main loop and the tail flush.
fn close_literal_run(out: &mut Vec<u8>, copy: usize) {
    if copy > 0 {
        let idx = out.len() - copy - 1;
        out[idx] = (copy - 1) as u8;
    } else {
        out.pop();
    }
}

/// Decodes a Level-1 compressed stream, masking the first control byte's
/// marker bits the way `fastlz1_decompress` does (`ctrl = (*ip++) & 31`).
///
/// Equivalent to `fastlz1_decompress`. Returns `Err` rather than writing
/// past `max_output` or reading past `input`'s length.
pub(crate) fn decompress(input: &[u8], max_output: usize) -> Result<Vec<u8>, CodecError> {
    if input.is_empty() {
        return Ok(Vec::new());
    }
    let mut out = Vec::with_capacity(max_output.min(input.len() * 3 + 16));
    let mut ip = 1usize;
    let mut ctrl = (input[0] & 31) as usize;

    loop {
        if ctrl < 32 {
            let run = ctrl + 1;
            if ip + run > input.len() {
                return Err(CodecError::TruncatedInput);
            }
            if out.len() + run > max_output {
                return Err(CodecError::OutputOverflow);
            }
            out.extend_from_slice(&input[ip..ip + run]);
            ip += run;
        } else {
            let mut len = (ctrl >> 5) - 1;
            let mut ofs = (ctrl & 31) << 8;
            if len == 6 {
                let b = *input.get(ip).ok_or(CodecError::TruncatedInput)?;
                ip += 1;
                len += b as usize;
            }
            let b = *input.get(ip).ok_or(CodecError::TruncatedInput)?;
            ip += 1;
            ofs += b as usize;

            let total_len = len + 3;
            if out.len() + total_len > max_output {
                return Err(CodecError::OutputOverflow);
            }
            if ofs + 1 > out.len() {
                return Err(CodecError::ReferenceUnderflow);
            }
            let mut refp = out.len() - ofs - 1;
            for _ in 0..total_len {
                let b = out[refp];
                out.push(b);
                refp += 1;
            }
        }

        if ip >= input.len() {
            break;
        }
        ctrl = input[ip] as usize;
        ip += 1;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compress_owned(input: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        compress(input, &mut out);
        out
    }

    #[test]
    fn empty_input_produces_empty_output() {
        assert!(compress_owned(b"").is_empty());
        assert_eq!(decompress(b"", 0).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn single_byte_is_a_one_byte_literal_run() {
        let out = compress_owned(&[0x42]);
        assert_eq!(out, vec![0x00, 0x42]);
        assert_eq!(decompress(&out, 1).unwrap(), vec![0x42]);
    }

    #[test]
    fn four_ascending_bytes_is_one_literal_run() {
        let input = [0x00u8, 0x01, 0x02, 0x03];
        let out = compress_owned(&input);
        assert_eq!(out, vec![0x03, 0x00, 0x01, 0x02, 0x03]);
        assert_eq!(decompress(&out, 4).unwrap(), input);
    }

    #[test]
    fn long_run_of_identical_bytes_round_trips() {
        let input = vec![0xAAu8; 1000];
        let out = compress_owned(&input);
        assert_eq!(out[0], 0x1F);
        assert_eq!(decompress(&out, input.len()).unwrap(), input);
    }

    #[test]
    fn length_264_match_round_trips() {
        // "AB" followed by enough repeats to force the longest single
        // Level-1 match opcode (length 264) plus a remainder.
        let mut input = vec![b'A', b'B'];
        input.extend(std::iter::repeat(b'C').take(400));
        let out = compress_owned(&input);
        assert_eq!(decompress(&out, input.len()).unwrap(), input);
    }

    #[test]
    fn incompressible_data_round_trips() {
        let input: Vec<u8> = (0..2000u32).map(|i| (i % 251) as u8).collect();
        let out = compress_owned(&input);
        assert_eq!(decompress(&out, input.len()).unwrap(), input);
    }

    #[test]
    fn boundary_lengths_around_65536_round_trip() {
        for &len in &[65535usize, 65536] {
            let input: Vec<u8> = (0..len).map(|i| (i % 7) as u8).collect();
            let out = compress_owned(&input);
            assert_eq!(decompress(&out, input.len()).unwrap(), input);
        }
    }

    #[test]
    fn truncated_match_header_is_an_error() {
        // First byte is always a literal run (the first control byte is
        // masked with & 31); the match opcode that runs out of bytes is
        // the second token.
        assert_eq!(
            decompress(&[0x00, 0x41, 0x20], 16),
            Err(CodecError::TruncatedInput)
        );
    }

    #[test]
    fn reference_before_output_start_is_an_error() {
        // Literal run emits "A"; the following short match (len=2,
        // ofs=1) would reference before the single decoded byte.
        assert_eq!(
            decompress(&[0x00, 0x41, 0x20, 0x01], 16),
            Err(CodecError::ReferenceUnderflow)
        );
    }

    #[test]
    fn output_overflow_is_an_error() {
        let out = compress_owned(&vec![0x11u8; 100]);
        assert_eq!(decompress(&out, 10), Err(CodecError::OutputOverflow));
    }

    /// Straight-line reference decoder, ported from
    /// `examples/original_source/tests/refimpl.c`'s `REF_Level1_decompress`,
    /// used only to cross-check the optimized decoder (testable property
    /// 4). Never exposed outside this test module.
    fn ref_decompress(input: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        let mut src = 0usize;
        while src < input.len() {
            let ty = input[src] >> 5;
            if ty == 0 {
                let run = 1 + input[src] as usize;
                src += 1;
                out.extend_from_slice(&input[src..src + run]);
                src += run;
            } else if ty < 7 {
                let ofs = 256 * (input[src] as usize & 31) + input[src + 1] as usize;
                let len = 2 + (input[src] >> 5) as usize;
                src += 2;
                let mut refp = out.len() - ofs - 1;
                for _ in 0..len {
                    let b = out[refp];
                    out.push(b);
                    refp += 1;
                }
            } else {
                let ofs = 256 * (input[src] as usize & 31) + input[src + 2] as usize;
                let len = 9 + input[src + 1] as usize;
                src += 3;
                let mut refp = out.len() - ofs - 1;
                for _ in 0..len {
                    let b = out[refp];
                    out.push(b);
                    refp += 1;
                }
            }
        }
        out
    }

    #[test]
    fn reference_decoder_agrees_with_optimized_decoder() {
        let cases: Vec<Vec<u8>> = vec![
            vec![],
            vec![0x07],
            vec![0x07, 0x09],
            vec![0xAA; 300],
            (0..3000u32).map(|i| (i % 97) as u8).collect(),
            b"abcabcabcabcabcabcabcabcabcabcabcabcabc".to_vec(),
        ];
        for input in cases {
            let out = compress_owned(&input);
            let optimized = decompress(&out, input.len()).unwrap();
            let reference = ref_decompress(&out);
            assert_eq!(optimized, reference);
            assert_eq!(optimized, input);
        }
    }
}
