use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A log file in its own temporary directory.
pub struct LogFile {
    _dir: TempDir,
    path: PathBuf,
}

impl LogFile {
    pub fn new(name: &str) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let path = dir.path().join(name);
        fs::write(&path, "").expect("failed to create log file");
        Self { _dir: dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends raw text, newlines included.
    pub fn append(&self, text: &str) {
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .expect("failed to open log file");
        file.write_all(text.as_bytes())
            .expect("failed to append to log file");
    }

    pub fn append_lines(&self, lines: &[&str]) {
        for line in lines {
            self.append(&format!("{line}\n"));
        }
    }

    /// Replaces the content, as a rotating appender would.
    pub fn rotate_with(&self, text: &str) {
        fs::write(&self.path, text).expect("failed to rewrite log file");
    }
}
