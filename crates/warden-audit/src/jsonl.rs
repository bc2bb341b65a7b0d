//! Newline-delimited JSON file sink.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, error, warn};
use warden_core::errors::{AuditError, WardenResult};
use warden_core::models::AuditRecord;
use warden_core::traits::IAuditSink;

use crate::encode_line;

/// Append-only JSONL file behind a single writer lock.
///
/// Opened once at startup. Every record is written unbuffered and synced
/// before `append` returns. A write that fails part way is cut back off the
/// file, so the log only ever holds whole lines.
pub struct JsonlAuditSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl JsonlAuditSink {
    /// Open `path` for appending, creating it and its parent directories.
    pub fn open(path: impl AsRef<Path>) -> WardenResult<Self> {
        let path = path.as_ref().to_path_buf();
        let open_failed = |e: std::io::Error| AuditError::OpenFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(open_failed)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(open_failed)?;

        debug!(path = %path.display(), "JSONL audit sink opened");
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IAuditSink for JsonlAuditSink {
    fn append(&self, record: &AuditRecord) -> WardenResult<()> {
        let line = encode_line(record)?;
        let mut file = self.file.lock().map_err(|_| AuditError::LockPoisoned)?;

        append_whole(&mut *file, line.as_bytes()).map_err(|e| {
            AuditError::WriteFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn flush(&self) -> WardenResult<()> {
        let file = self.file.lock().map_err(|_| AuditError::LockPoisoned)?;
        file.sync_data().map_err(|e| AuditError::WriteFailed {
            reason: e.to_string(),
        })?;
        Ok(())
    }

    fn name(&self) -> &str {
        "jsonl"
    }
}

/// A file that can be measured, synced, and cut back to an earlier length.
trait AppendTarget: Write {
    fn len(&self) -> io::Result<u64>;
    fn sync(&self) -> io::Result<()>;
    fn truncate(&mut self, len: u64) -> io::Result<()>;
}

impl AppendTarget for File {
    fn len(&self) -> io::Result<u64> {
        Ok(self.metadata()?.len())
    }

    fn sync(&self) -> io::Result<()> {
        self.sync_data()
    }

    fn truncate(&mut self, len: u64) -> io::Result<()> {
        self.set_len(len)?;
        self.sync_data()
    }
}

/// Write `bytes` and sync, or leave the target at its prior length.
fn append_whole<T: AppendTarget + ?Sized>(target: &mut T, bytes: &[u8]) -> io::Result<()> {
    let before = target.len()?;
    let written = target
        .write_all(bytes)
        .and_then(|()| target.flush())
        .and_then(|()| target.sync());

    if let Err(e) = written {
        if let Err(rollback) = target.truncate(before) {
            error!(
                error = %rollback,
                length = before,
                "audit log could not be cut back after a failed write"
            );
        }
        return Err(e);
    }
    Ok(())
}

impl Drop for JsonlAuditSink {
    fn drop(&mut self) {
        if let Ok(file) = self.file.get_mut() {
            if let Err(e) = file.sync_data() {
                warn!(path = %self.path.display(), error = %e, "audit sync on close failed");
            }
        }
    }
}
