//! Flag submission domain model
//!
//! A flag is an opaque token handed over by the host. Each flag yields exactly
//! one [`SubmissionResult`], and a run yields one [`ResultBatch`] in input order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a status string is not one of the known outcomes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown submission status: '{0}'")]
pub struct UnknownStatus(pub String);

/// An opaque flag token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Flag(String);

impl Flag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Flag {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Flag {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of submitting a single flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStatus {
    /// Accepted by the scoring service
    Success,
    /// Rejected as malformed
    Invalid,
    /// Already submitted before
    Duplicate,
}

impl SubmissionStatus {
    /// Wire name of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Success => "SUCCESS",
            SubmissionStatus::Invalid => "INVALID",
            SubmissionStatus::Duplicate => "DUPLICATE",
        }
    }

    /// Human-readable message reported alongside the status
    pub fn message(&self) -> &'static str {
        match self {
            SubmissionStatus::Success => "submission succeeded",
            SubmissionStatus::Invalid => "flag format invalid",
            SubmissionStatus::Duplicate => "flag already exists",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            SubmissionStatus::Success,
            SubmissionStatus::Invalid,
            SubmissionStatus::Duplicate,
        ]
        .into_iter()
        .find(|status| status.as_str().eq_ignore_ascii_case(s))
        .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Classifies a flag by case-insensitive substring.
///
/// Rules are checked in order and the first match wins: `test` is a success,
/// `invalid` is an invalid flag, anything else is a duplicate.
pub fn classify(flag: &str) -> (SubmissionStatus, &'static str) {
    let lowered = flag.to_lowercase();

    let status = if lowered.contains("test") {
        SubmissionStatus::Success
    } else if lowered.contains("invalid") {
        SubmissionStatus::Invalid
    } else {
        SubmissionStatus::Duplicate
    };

    (status, status.message())
}

/// The outcome recorded for one flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionResult {
    flag: Flag,
    status: SubmissionStatus,
    msg: String,
}

impl SubmissionResult {
    pub fn new(flag: impl Into<Flag>, status: SubmissionStatus, msg: impl Into<String>) -> Self {
        Self {
            flag: flag.into(),
            status,
            msg: msg.into(),
        }
    }

    /// Builds the result for a flag by running it through [`classify`]
    pub fn classified(flag: Flag) -> Self {
        let (status, msg) = classify(flag.as_str());
        Self::new(flag, status, msg)
    }

    pub fn flag(&self) -> &Flag {
        &self.flag
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }
}

/// Ordered results, one per input flag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultBatch(Vec<SubmissionResult>);

impl ResultBatch {
    /// Classifies every flag, preserving input order
    pub fn classify_all(flags: impl IntoIterator<Item = Flag>) -> Self {
        Self(flags.into_iter().map(SubmissionResult::classified).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SubmissionResult> {
        self.0.iter()
    }

    /// Counts results with the given status
    pub fn count(&self, status: SubmissionStatus) -> usize {
        self.0.iter().filter(|r| r.status == status).count()
    }

    pub fn into_inner(self) -> Vec<SubmissionResult> {
        self.0
    }
}

impl From<Vec<SubmissionResult>> for ResultBatch {
    fn from(results: Vec<SubmissionResult>) -> Self {
        Self(results)
    }
}

impl IntoIterator for ResultBatch {
    type Item = SubmissionResult;
    type IntoIter = std::vec::IntoIter<SubmissionResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
