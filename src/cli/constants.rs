//! Identity strings and the verbosity-gated display infrastructure shared
//! by the CLI's pack/unpack paths.
//!
//! Grounded on `examples/jafreck-lz4r/src/cli/constants.rs`'s
//! `DISPLAY_LEVEL` atomic + `displaylevel!` family, narrowed to the
//! handful of strings and macros this CLI's smaller surface actually uses.

use std::sync::atomic::{AtomicU32, Ordering};

pub const PROGRAM_NAME: &str = "6pack";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 0 = silent, 1 = errors only, 2 = normal, 3 = verbose.
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Print to stderr — equivalent to `lz4cli.c`'s `DISPLAY(...)`.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Conditionally print to stderr at or above `level` — equivalent to
/// `lz4cli.c`'s `DISPLAYLEVEL(l, ...)`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_level_round_trips() {
        let prev = display_level();
        set_display_level(3);
        assert_eq!(display_level(), 3);
        set_display_level(prev);
    }
}
