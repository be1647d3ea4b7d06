//! Append-only JSONL record of every caption generation call.
//!
//! Each record is serialized with its trailing newline into one buffer and
//! written with a single `write_all` on a file opened in append mode, so
//! concurrent writers never interleave partial lines.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Stored descriptions are cut to this many characters.
pub const MAX_LOGGED_DESCRIPTION_CHARS: usize = 100;

/// One line in the generation log. Written once, never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub timestamp: String,
    pub business_type: String,
    pub vibe: String,
    pub post_description: String,
    pub generation_time: f64,
    pub success: bool,
}

impl LogRecord {
    pub fn new(
        timestamp: String,
        business_type: &str,
        vibe: &str,
        post_description: &str,
        generation_time: f64,
        success: bool,
    ) -> Self {
        Self {
            timestamp,
            business_type: business_type.to_string(),
            vibe: vibe.to_string(),
            post_description: post_description
                .chars()
                .take(MAX_LOGGED_DESCRIPTION_CHARS)
                .collect(),
            generation_time,
            success,
        }
    }
}

/// Handle to the shared generation log file.
#[derive(Debug, Clone)]
pub struct GenerationLog {
    path: PathBuf,
}

impl GenerationLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one record as a single JSON line. Creates the parent directory if needed.
    pub async fn append(&self, record: &LogRecord) -> Result<()> {
        let mut line = serde_json::to_vec(record).context("Failed to serialize log record")?;
        line.push(b'\n');

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_line(&path, &line))
            .await
            .context("Log writer task panicked")?
    }
}

fn write_line(path: &Path, line: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open generation log {}", path.display()))?;

    file.write_all(line)
        .with_context(|| format!("Failed to append to generation log {}", path.display()))
}
