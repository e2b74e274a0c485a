//! Host-side plugin invocation
//!
//! Runs a flag submitter executable once with a batch of flags and decodes
//! whatever it printed.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

use super::protocol::{decode_results, PluginManifest};
use crate::domain::{Flag, ResultBatch};

/// What a plugin printed for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// A result batch was emitted
    Batch(ResultBatch),

    /// The plugin printed a plain-text notice instead of a batch
    Notice(String),
}

/// Runs a flag submitter plugin
#[derive(Debug, Clone)]
pub struct PluginRunner {
    path: PathBuf,
}

impl PluginRunner {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the manifest from the plugin
    pub fn manifest(&self) -> Result<PluginManifest> {
        let output = Command::new(&self.path)
            .arg("--manifest")
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("Failed to execute plugin: {}", self.path.display()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("Plugin returned error: {}", stderr.trim());
        }

        serde_json::from_slice(&output.stdout).context("Failed to parse plugin manifest")
    }

    /// Submits flags and decodes the plugin's stdout
    pub fn submit(&self, flags: &[Flag]) -> Result<Submission> {
        let argument = serde_json::to_string(flags).context("Failed to serialize flags")?;

        let output = Command::new(&self.path)
            .arg(argument)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("Failed to execute plugin: {}", self.path.display()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("Plugin exited with {}: {}", output.status, stderr.trim());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let text = stdout.trim();

        if text.is_empty() {
            anyhow::bail!("Plugin produced no output: {}", self.path.display());
        }

        if text.starts_with('[') || text.starts_with('{') {
            let batch = decode_results(text).context("Failed to parse plugin response")?;
            Ok(Submission::Batch(batch))
        } else {
            Ok(Submission::Notice(text.to_string()))
        }
    }
}
