//! Main CLI application structure

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use super::output::Output;
use crate::domain::{ResultBatch, SubmissionStatus};
use crate::plugin::{decode_flags, encode_batch, ArgumentError, PluginManifest};

/// Exit code for a missing flags argument (only with `--strict`).
///
/// Kept clear of 1 (internal error) and 2 (clap usage error).
pub const EXIT_MISSING_ARGUMENT: u8 = 3;

/// Exit code for an unreadable flags argument (only with `--strict`)
pub const EXIT_BAD_ARGUMENT: u8 = 4;

#[derive(Parser, Debug)]
#[command(name = "flag-submitter")]
#[command(author, version, about = "Flag submission plugin: classifies a JSON array of flags")]
pub struct Cli {
    /// JSON array of flags, e.g. '["flag{a}", "flag{b}"]'
    #[arg(value_name = "FLAGS", allow_hyphen_values = true)]
    pub flags: Option<String>,

    /// Enable verbose output on stderr
    #[arg(long, short = 'v', env = "FLAG_SUBMITTER_VERBOSE")]
    pub verbose: bool,

    /// Exit non-zero when the flags argument is missing or unreadable
    #[arg(long, env = "FLAG_SUBMITTER_STRICT")]
    pub strict: bool,

    /// Print the plugin manifest and exit
    #[arg(long, conflicts_with = "flags")]
    pub manifest: bool,
}

/// Maps a rejected flags argument to the process exit code
pub fn exit_code(err: &ArgumentError, strict: bool) -> u8 {
    if !strict {
        return 0;
    }

    match err {
        ArgumentError::Missing => EXIT_MISSING_ARGUMENT,
        ArgumentError::Malformed(_)
        | ArgumentError::NotAnArray(_)
        | ArgumentError::NonStringElement { .. } => EXIT_BAD_ARGUMENT,
    }
}

/// Main entry point for the CLI
pub fn run() -> Result<ExitCode> {
    execute(Cli::parse())
}

/// Executes an already parsed invocation
pub fn execute(cli: Cli) -> Result<ExitCode> {
    let output = Output::new(cli.verbose);

    if cli.manifest {
        output.data(&PluginManifest::current())?;
        return Ok(ExitCode::SUCCESS);
    }

    let flags = match decode_flags(cli.flags.as_deref()) {
        Ok(flags) => flags,
        Err(err) => {
            output.line(&err.to_string());
            let code = exit_code(&err, cli.strict);
            output.verbose_ctx("submit", &format!("no batch emitted, exit code {}", code));
            return Ok(ExitCode::from(code));
        }
    };

    output.verbose_ctx("submit", &format!("received {} flag(s)", flags.len()));

    let batch = ResultBatch::classify_all(flags);

    if output.is_verbose() {
        for result in batch.iter() {
            output.verbose_ctx("submit", &format!("{} -> {}", result.flag(), result.status()));
        }
        output.verbose_ctx(
            "submit",
            &format!(
                "{} succeeded, {} invalid, {} duplicate",
                batch.count(SubmissionStatus::Success),
                batch.count(SubmissionStatus::Invalid),
                batch.count(SubmissionStatus::Duplicate),
            ),
        );
    }

    let json = encode_batch(&batch).context("Failed to encode results")?;
    output.line(&json);

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags_argument() {
        let cli = Cli::try_parse_from(["flag-submitter", r#"["a","b"]"#]).unwrap();

        assert_eq!(cli.flags.as_deref(), Some(r#"["a","b"]"#));
        assert!(!cli.strict);
        assert!(!cli.manifest);
    }

    #[test]
    fn flags_argument_is_optional() {
        let cli = Cli::try_parse_from(["flag-submitter"]).unwrap();
        assert!(cli.flags.is_none());
    }

    #[test]
    fn hyphen_leading_argument_is_data() {
        let cli = Cli::try_parse_from(["flag-submitter", "-not-json"]).unwrap();
        assert_eq!(cli.flags.as_deref(), Some("-not-json"));
    }

    #[test]
    fn manifest_conflicts_with_flags() {
        assert!(Cli::try_parse_from(["flag-submitter", "--manifest", "[]"]).is_err());
    }

    #[test]
    fn lenient_mode_always_exits_zero() {
        assert_eq!(exit_code(&ArgumentError::Missing, false), 0);
        assert_eq!(exit_code(&ArgumentError::NotAnArray("null"), false), 0);
    }

    #[test]
    fn strict_mode_exit_codes() {
        assert_eq!(exit_code(&ArgumentError::Missing, true), EXIT_MISSING_ARGUMENT);
        assert_eq!(exit_code(&ArgumentError::NotAnArray("null"), true), EXIT_BAD_ARGUMENT);

        let malformed = decode_flags(Some("{")).unwrap_err();
        assert_eq!(exit_code(&malformed, true), EXIT_BAD_ARGUMENT);
    }

    #[test]
    fn strict_codes_differ_from_usage_error() {
        let usage = Cli::try_parse_from(["flag-submitter", "--strict", r#"["a"]"#, "extra"])
            .unwrap_err()
            .exit_code();

        assert_eq!(usage, 2);
        for code in [EXIT_MISSING_ARGUMENT, EXIT_BAD_ARGUMENT] {
            assert_ne!(i32::from(code), usage);
            assert_ne!(code, 1);
        }
    }
}
