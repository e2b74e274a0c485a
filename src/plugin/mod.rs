//! # Plugin Protocol
//!
//! The contract between a host and a flag submitter plugin.
//!
//! ## Overview
//!
//! Plugins are separate executables. The host passes the flags to submit as a
//! JSON array in the first argument and reads the results from stdout. This
//! keeps plugins language-agnostic.
//!
//! ## Protocol
//!
//! ```text
//! Host                              Plugin Binary
//!  │                                    │
//!  ├── Spawn: flag-submitter '["flag{a}", "flag{b}"]'
//!  │                                    │
//!  └── Stdout: [{"flag": "flag{a}", "status": "SUCCESS", "msg": "..."}, ...]
//! ```
//!
//! When the argument is missing or unreadable the plugin prints a single
//! plain-text notice instead of a result array.
//!
//! Every plugin must support `--manifest` to declare its capabilities.
//!
//! ## Key Types
//!
//! - [`PluginManifest`] - Declares plugin capabilities
//! - [`ArgumentError`] - Why the flags argument was rejected
//! - [`ProtocolError`] - Why plugin output could not be decoded
//! - [`PluginRunner`] - Invokes a plugin from the host side

mod protocol;
mod runner;

pub use protocol::{
    decode_flags, decode_results, encode_batch, ArgumentError, PluginManifest, PluginType,
    ProtocolError,
};
pub use runner::{PluginRunner, Submission};
