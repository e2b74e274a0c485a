//! Plugin protocol types
//!
//! The host passes flags as a JSON array in the first argument and reads a
//! JSON array of results from stdout. Every plugin also supports `--manifest`
//! to declare its capabilities.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::domain::{Flag, ResultBatch, SubmissionResult, SubmissionStatus, UnknownStatus};

/// Problems with the flags argument handed to the plugin
#[derive(Debug, Error)]
pub enum ArgumentError {
    #[error("no flags received")]
    Missing,

    #[error("failed to parse flags argument: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("failed to parse flags argument: expected a JSON array of strings, got {0}")]
    NotAnArray(&'static str),

    #[error("failed to parse flags argument: element {index} is {kind}, expected a string")]
    NonStringElement { index: usize, kind: &'static str },
}

/// Problems decoding plugin output on the host side
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("plugin output is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("plugin output must be a result array or a flag/status object, got {0}")]
    UnrecognizedOutput(&'static str),

    #[error("result {index} is malformed: {source}")]
    BadResult {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("status for flag '{flag}' is {kind}, expected a string")]
    NonStringStatus { flag: String, kind: &'static str },

    #[error(transparent)]
    UnknownStatus(#[from] UnknownStatus),
}

/// Plugin manifest declaring capabilities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginManifest {
    /// Plugin name (e.g., "flag-submitter")
    pub name: String,

    /// Plugin version
    pub version: String,

    /// Human-readable description
    pub description: String,

    /// Plugin type
    #[serde(rename = "type")]
    pub plugin_type: PluginType,

    /// Supported operations
    pub operations: Vec<String>,
}

impl PluginManifest {
    /// Manifest of this binary
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: env!("CARGO_PKG_DESCRIPTION").to_string(),
            plugin_type: PluginType::FlagSubmitter,
            operations: vec!["submit".to_string()],
        }
    }
}

/// Type of plugin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PluginType {
    /// Receives flags and reports a status for each
    FlagSubmitter,
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Decodes the flags argument passed by the host.
///
/// The argument must be a JSON array whose elements are all strings.
pub fn decode_flags(raw: Option<&str>) -> Result<Vec<Flag>, ArgumentError> {
    let raw = raw.ok_or(ArgumentError::Missing)?;
    let value: Value = serde_json::from_str(raw).map_err(ArgumentError::Malformed)?;

    let items = match value {
        Value::Array(items) => items,
        other => return Err(ArgumentError::NotAnArray(json_kind(&other))),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(s) => Ok(Flag::from(s)),
            other => Err(ArgumentError::NonStringElement {
                index,
                kind: json_kind(&other),
            }),
        })
        .collect()
}

/// Encodes a batch as a single line of JSON. Non-ASCII text is kept literal.
pub fn encode_batch(batch: &ResultBatch) -> serde_json::Result<String> {
    serde_json::to_string(batch)
}

/// Result entry as written by arbitrary plugins
#[derive(Debug, Deserialize)]
struct RawResult {
    flag: Flag,
    status: String,
    #[serde(default)]
    msg: String,
}

/// Decodes plugin stdout on the host side.
///
/// Accepts the result array form and the older `{"<flag>": "<STATUS>"}`
/// object form, whose entries carry no message.
pub fn decode_results(output: &str) -> Result<ResultBatch, ProtocolError> {
    let value: Value = serde_json::from_str(output.trim()).map_err(ProtocolError::InvalidJson)?;

    let results = match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| -> Result<SubmissionResult, ProtocolError> {
                let raw: RawResult = serde_json::from_value(item)
                    .map_err(|source| ProtocolError::BadResult { index, source })?;
                let status: SubmissionStatus = raw.status.parse()?;
                Ok(SubmissionResult::new(raw.flag, status, raw.msg))
            })
            .collect::<Result<Vec<_>, _>>()?,
        Value::Object(entries) => entries
            .into_iter()
            .map(|(flag, status)| -> Result<SubmissionResult, ProtocolError> {
                let status: SubmissionStatus = match status {
                    Value::String(s) => s.parse()?,
                    other => {
                        return Err(ProtocolError::NonStringStatus {
                            flag,
                            kind: json_kind(&other),
                        })
                    }
                };
                Ok(SubmissionResult::new(flag, status, ""))
            })
            .collect::<Result<Vec<_>, _>>()?,
        other => return Err(ProtocolError::UnrecognizedOutput(json_kind(&other))),
    };

    Ok(ResultBatch::from(results))
}
