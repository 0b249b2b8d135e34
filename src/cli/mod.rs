//! Command-line front end for the `6pack` archiver.
//!
//! The teacher's `help.rs`, `arg_utils.rs`, `op_mode.rs`, and `init.rs` are
//! not present here: their `ParsedArgs`/`Prefs`/`CliInit` shapes belonged to
//! a much larger argument surface than this archiver needs, so they were
//! dropped in the final trim pass (see `DESIGN.md`).

pub mod constants;
pub mod args;
