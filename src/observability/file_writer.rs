//! Line-oriented trace file with size-based rotation.

use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotation threshold for the active trace file (10 MiB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Backups kept after a rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Appends lines to a file, rotating it once it grows past a size limit.
///
/// A rotated file is renamed to `<name>.<UTC timestamp>` next to the active
/// file, e.g. `staffdesk-otlp.json.20261018T093015.123456789Z`. Only the
/// newest backups survive; timestamps sort lexicographically so no file
/// metadata is consulted.
///
/// The handle is opened lazily on the first write and shared behind a
/// `Mutex`, so a writer can be used from the exporter's worker thread.
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    writer: Mutex<Option<File>>,
}

impl FileWriter {
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            writer: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline and flushes.
    ///
    /// # Errors
    ///
    /// Returns an error if rotation, opening or writing fails, or if the lock
    /// was poisoned by a panicking writer.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        if self.needs_rotation() {
            *writer = None;
            self.rotate()?;
        }

        let file = match writer.take() {
            Some(file) => file,
            None => OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?,
        };
        let file = writer.insert(file);

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|m| m.len() > self.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = Utc::now().format("%Y%m%dT%H%M%S%.9fZ");
        let mut backup = self.file_path.clone().into_os_string();
        backup.push(format!(".{stamp}"));

        fs::rename(&self.file_path, PathBuf::from(backup))?;
        self.prune_backups()
    }

    fn prune_backups(&self) -> io::Result<()> {
        let mut backups = self.backups()?;
        backups.sort_unstable_by(|a, b| b.cmp(a));

        for stale in backups.iter().skip(self.max_backups) {
            // Best effort; a leftover backup is retried on the next rotation.
            let _ = fs::remove_file(stale);
        }
        Ok(())
    }

    /// Backup files of this writer, in no particular order.
    fn backups(&self) -> io::Result<Vec<PathBuf>> {
        let dir = self.file_path.parent().unwrap_or_else(|| Path::new("."));
        let prefix = self
            .file_path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| format!("{n}."))
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Invalid trace file name"))?;

        Ok(fs::read_dir(dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&prefix))
            })
            .collect())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = FileWriter::new(path.clone());

        writer.write_line(r#"{"a":1}"#).unwrap();
        writer.write_line(r#"{"b":2}"#).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_once_the_limit_is_exceeded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = FileWriter::with_limits(path.clone(), 8, 3);

        writer.write_line("first line").unwrap();
        writer.write_line("second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
        let backups = writer.backups().unwrap();
        assert_eq!(backups.len(), 1);
        assert_eq!(fs::read_to_string(&backups[0]).unwrap(), "first line\n");
    }

    #[test]
    fn keeps_only_the_newest_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = FileWriter::with_limits(path, 1, 2);

        for i in 0..6 {
            writer.write_line(&format!("line {i}")).unwrap();
            std::thread::sleep(std::time::Duration::from_millis(2));
        }

        let mut backups = writer.backups().unwrap();
        backups.sort();
        assert_eq!(backups.len(), 2);
        assert_eq!(fs::read_to_string(&backups[0]).unwrap(), "line 3\n");
        assert_eq!(fs::read_to_string(&backups[1]).unwrap(), "line 4\n");
    }

    #[test]
    fn ignores_unrelated_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("other.json.20200101T000000Z"), "x").unwrap();
        let writer = FileWriter::with_limits(dir.path().join("trace.json"), 1, 0);

        writer.write_line("a").unwrap();
        writer.write_line("b").unwrap();

        assert!(writer.backups().unwrap().is_empty());
        assert!(dir.path().join("other.json.20200101T000000Z").exists());
    }
}
