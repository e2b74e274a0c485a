//! # Command-Line Interface
//!
//! The plugin entry point the host invokes.
//!
//! ## Invocation
//!
//! ```bash
//! flag-submitter '["test-flag-1", "invalid-flag", "ctf{abc}"]'
//! ```
//!
//! ## Options
//!
//! | Option | Env var | Purpose |
//! |--------|---------|---------|
//! | `--verbose`, `-v` | `FLAG_SUBMITTER_VERBOSE` | Debug output on stderr |
//! | `--strict` | `FLAG_SUBMITTER_STRICT` | Non-zero exit on a missing or unreadable argument |
//! | `--manifest` | | Print the plugin manifest |
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the invocation.

mod app;
mod output;

pub use app::{execute, exit_code, run, Cli, EXIT_BAD_ARGUMENT, EXIT_MISSING_ARGUMENT};
pub use output::Output;
