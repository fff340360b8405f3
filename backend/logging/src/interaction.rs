//! Append-only interaction log.
//!
//! One self-contained NDJSON line per completed turn. Appends are guarded
//! by a mutex so records from concurrent conversations interleave without
//! corruption, and lines are never mutated after write.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};

use scamlure_core::{InteractionSink, TurnRecord};

/// NDJSON file sink for per-turn records.
pub struct NdjsonInteractionLog {
    path: PathBuf,
    file: Mutex<File>,
}

impl NdjsonInteractionLog {
    /// Open (or create) the log file in append mode, creating parent
    /// directories as needed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating log directory {}", parent.display()))?;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening interaction log {}", path.display()))?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InteractionSink for NdjsonInteractionLog {
    fn record(&self, record: &TurnRecord) -> Result<()> {
        let line = serde_json::to_string(record).context("serializing turn record")?;
        let mut file = self
            .file
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writeln!(file, "{line}").context("appending turn record")?;
        file.flush().context("flushing interaction log")?;
        Ok(())
    }
}
