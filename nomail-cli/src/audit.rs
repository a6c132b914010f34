//! Append-only audit log.
//!
//! One line per reconciliation event, human-readable:
//! `<RFC3339 UTC> <domain> <SPF|MX|DMARC|ZONE> <ACTION> <detail>`.
//! Write failures are logged and swallowed; the audit trail never aborts
//! the run.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};

/// Audited action per record kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    AlreadyCorrect,
    Created,
    Updated,
    Skipped,
    Failed,
}

impl AuditAction {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AlreadyCorrect => "ALREADY_CORRECT",
            Self::Created => "CREATED",
            Self::Updated => "UPDATED",
            Self::Skipped => "SKIPPED",
            Self::Failed => "FAILED",
        }
    }
}

pub struct AuditLog {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl AuditLog {
    /// Open the log for appending, creating it if needed.
    pub fn create(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one event line. Flushed immediately so the file is usable
    /// while the run is still in progress.
    pub fn record(&mut self, domain: &str, tag: &str, action: AuditAction, detail: Option<&str>) {
        let ts = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let result = match detail {
            Some(detail) => {
                writeln!(self.writer, "{ts} {domain} {tag} {} {detail}", action.as_str())
            }
            None => writeln!(self.writer, "{ts} {domain} {tag} {}", action.as_str()),
        }
        .and_then(|()| self.writer.flush());

        if let Err(e) = result {
            log::warn!("audit log write failed: {e}");
        }
    }
}
