//! Flag submitter - an example flag submission plugin
//!
//! The host hands the plugin a JSON array of flags and reads back one
//! result per flag. Submission to a real scoring service is stubbed out by a
//! fixed classification rule.

pub mod domain;
pub mod plugin;
pub mod cli;

pub use domain::{classify, Flag, ResultBatch, SubmissionResult, SubmissionStatus};
