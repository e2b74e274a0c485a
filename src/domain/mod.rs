//! Domain models for flag submission
//!
//! Contains the classification rules without any I/O concerns.

mod submission;

pub use submission::{classify, Flag, ResultBatch, SubmissionResult, SubmissionStatus, UnknownStatus};
