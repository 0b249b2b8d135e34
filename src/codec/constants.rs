//! Compile-time tunables for the match engine and both codec levels.
//!
//! Mirrors the constants scattered across `fastlz.c`'s macros; collected
//! here with their provenance so the hash function and the opcode formats
//! that depend on them stay in sync.

/// `HASH_LOG` in `fastlz.c`. Not just a tuning knob: the hash function's
/// `16 - HASH_LOG` shift depends on this value. Do not change one without
/// the other.
pub const HASH_LOG: u32 = 13;

/// `1 << HASH_LOG`. Number of slots in the match engine's hash table.
pub const HASH_SIZE: usize = 1 << HASH_LOG;

/// Maximum representable short/long-match distance for Level 1, and the
/// near-distance ceiling for Level 2 (`MAX_DISTANCE` in `fastlz.c`).
pub const MAX_L1_DISTANCE: usize = 8192;

/// Level 2's near/far boundary (`MAX_L2_DISTANCE` in `fastlz.c`). Matches
/// at or beyond this biased distance are encoded as far matches.
pub const MAX_L2_DISTANCE: usize = 8191;

/// Level 2's maximum representable distance (`MAX_FARDISTANCE` in
/// `fastlz.c`): `65535 + MAX_L2_DISTANCE - 1`.
pub const MAX_FAR_DISTANCE: usize = 65535 + MAX_L2_DISTANCE - 1;

/// Maximum literal-run length before a new prefix byte is needed
/// (`MAX_COPY` in `fastlz.c`).
pub const MAX_COPY: usize = 32;

/// Level 1's maximum single-opcode match length (`MAX_LEN` in `fastlz.c`);
/// longer matches are chained as repeated maximum-length blocks.
pub const MAX_LEN: usize = 264;

/// Input length at or above which `compress` selects Level 2 over Level 1.
pub const LEVEL_AUTO_THRESHOLD: usize = 65536;
