//! Command-line argument parsing for the `6pack` archiver.
//!
//! The entry points are [`parse_args`] (reads `std::env::args()`) and
//! [`parse_args_from`] (takes an explicit slice, suitable for unit
//! testing), following the dual-entry-point shape of
//! `examples/jafreck-lz4r/src/cli/args.rs`'s `parse_args`/`parse_args_from`.
//! Unrecognised or malformed invocations return an `Err` via
//! `anyhow::anyhow!`, matching the teacher's usage-error convention.

use anyhow::anyhow;

use super::constants::{set_display_level, PROGRAM_NAME, VERSION};

/// What the CLI was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpMode {
    Pack,
    Unpack,
}

/// Parsed command-line state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    pub op_mode: OpMode,
    pub input_filename: String,
    pub output_filename: String,
    /// When `true`, a `-h`/`--help` or `-v`/`--version` flag was processed;
    /// the caller should exit 0 without performing any I/O.
    pub exit_early: bool,
    pub exe_name: String,
}

/// Parses `std::env::args()` (skipping argv[0]).
pub fn parse_args() -> anyhow::Result<ParsedArgs> {
    let exe_name = std::env::args().next().unwrap_or_default();
    let argv: Vec<String> = std::env::args().skip(1).collect();
    parse_args_from(&exe_name, &argv)
}

/// Parses an explicit argument list. `exe_name` is argv[0]; `argv` is
/// argv[1..]. Callable from tests without touching `std::env`.
///
/// Supported forms (matching `6pack.c`'s `main`, extended with the
/// verbosity flags and explicit unpack mode this port adds):
///   `6pack <input> <output>`        pack `input` into `output`
///   `6pack -d <archive> <output>`   unpack `archive` into `output`
///   `6pack -h` / `--help`           print usage, exit
///   `6pack -v` / `--version`        print version, exit
///   `-q` / `--quiet`                suppress non-error output
///   `-vv` / `--verbose`             verbose output
pub fn parse_args_from(exe_name: &str, argv: &[String]) -> anyhow::Result<ParsedArgs> {
    let exe_name = exe_name.to_owned();

    if argv.is_empty() {
        return Err(anyhow!(
            "bad usage: missing input/output files\nusage: {PROGRAM_NAME} input-file output-file"
        ));
    }

    let mut op_mode = OpMode::Pack;
    let mut positionals: Vec<&str> = Vec::new();

    for arg in argv {
        match arg.as_str() {
            "-h" | "--help" => {
                return Ok(ParsedArgs {
                    op_mode,
                    input_filename: String::new(),
                    output_filename: String::new(),
                    exit_early: true,
                    exe_name,
                });
            }
            "-v" | "--version" => {
                return Ok(ParsedArgs {
                    op_mode,
                    input_filename: String::new(),
                    output_filename: String::new(),
                    exit_early: true,
                    exe_name,
                });
            }
            "-d" | "--decompress" => op_mode = OpMode::Unpack,
            "-q" | "--quiet" => set_display_level(1),
            "-vv" | "--verbose" => set_display_level(3),
            other if other.starts_with('-') && other.len() > 1 => {
                return Err(anyhow!("bad usage: unrecognised option '{other}'"));
            }
            other => positionals.push(other),
        }
    }

    if positionals.len() < 2 {
        return Err(anyhow!(
            "bad usage: expected input and output files\nusage: {PROGRAM_NAME} input-file output-file"
        ));
    }
    if positionals.len() > 2 {
        return Err(anyhow!("bad usage: too many arguments"));
    }

    Ok(ParsedArgs {
        op_mode,
        input_filename: positionals[0].to_owned(),
        output_filename: positionals[1].to_owned(),
        exit_early: false,
        exe_name,
    })
}

/// Usage text printed for `-h`/`--help`.
pub fn usage_text() -> String {
    format!(
        "usage: {PROGRAM_NAME} [-d] [-q|-vv] input-file output-file\n\n\
         pack input-file into output-file (a 6pack archive), or\n\
         with -d, unpack an existing archive back into output-file\n\n\
         options:\n  \
         -d, --decompress   unpack instead of pack\n  \
         -q, --quiet        suppress non-error output\n  \
         -vv, --verbose     verbose output\n  \
         -h, --help         show this help\n  \
         -v, --version      show version\n"
    )
}

/// Version text printed for `-v`/`--version`.
pub fn version_text() -> String {
    format!("{PROGRAM_NAME} {VERSION}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_is_an_error() {
        assert!(parse_args_from("6pack", &[]).is_err());
    }

    #[test]
    fn two_positionals_is_pack_mode() {
        let parsed = parse_args_from("6pack", &args(&["in.txt", "out.6pk"])).unwrap();
        assert_eq!(parsed.op_mode, OpMode::Pack);
        assert_eq!(parsed.input_filename, "in.txt");
        assert_eq!(parsed.output_filename, "out.6pk");
        assert!(!parsed.exit_early);
    }

    #[test]
    fn dash_d_selects_unpack_mode() {
        let parsed = parse_args_from("6pack", &args(&["-d", "archive.6pk", "out.bin"])).unwrap();
        assert_eq!(parsed.op_mode, OpMode::Unpack);
        assert_eq!(parsed.input_filename, "archive.6pk");
        assert_eq!(parsed.output_filename, "out.bin");
    }

    #[test]
    fn help_flag_exits_early_without_requiring_files() {
        let parsed = parse_args_from("6pack", &args(&["-h"])).unwrap();
        assert!(parsed.exit_early);
    }

    #[test]
    fn version_flag_exits_early() {
        let parsed = parse_args_from("6pack", &args(&["--version"])).unwrap();
        assert!(parsed.exit_early);
    }

    #[test]
    fn unknown_option_is_rejected() {
        assert!(parse_args_from("6pack", &args(&["--bogus", "a", "b"])).is_err());
    }

    #[test]
    fn too_many_positionals_is_rejected() {
        assert!(parse_args_from("6pack", &args(&["a", "b", "c"])).is_err());
    }

    #[test]
    fn too_few_positionals_is_rejected() {
        assert!(parse_args_from("6pack", &args(&["a"])).is_err());
    }

    #[test]
    fn quiet_and_verbose_flags_parse_alongside_files() {
        let parsed = parse_args_from("6pack", &args(&["-q", "in", "out"])).unwrap();
        assert_eq!(parsed.input_filename, "in");
        let parsed = parse_args_from("6pack", &args(&["-vv", "in", "out"])).unwrap();
        assert_eq!(parsed.output_filename, "out");
    }
}
