//! Scenario slot stored as a single plain-text file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::error::SlotError;
use crate::domain::slot::ScenarioSlot;

/// Slot persisted in one file whose content is the scenario name.
///
/// A missing or blank file means the slot is absent. Test drivers may write the
/// file directly instead of going through the control API.
#[derive(Debug, Clone)]
pub struct FileScenarioSlot {
    path: PathBuf,
}

impl FileScenarioSlot {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> SlotError {
        SlotError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ScenarioSlot for FileScenarioSlot {
    fn read(&self) -> Result<Option<String>, SlotError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let value = content.trim();
                Ok((!value.is_empty()).then(|| value.to_owned()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn write(&self, value: &str) -> Result<(), SlotError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        // Write-then-rename so concurrent readers never observe a partial name.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, value).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))
    }

    fn clear(&self) -> Result<(), SlotError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_absent() {
        let dir = TempDir::new().unwrap();
        let slot = FileScenarioSlot::new(dir.path().join("scenario"));
        assert_eq!(slot.read().unwrap(), None);
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let slot = FileScenarioSlot::new(dir.path().join("nested/state/scenario"));

        slot.write("rate-limit").unwrap();

        assert_eq!(slot.read().unwrap().as_deref(), Some("rate-limit"));
        assert!(!dir.path().join("nested/state/scenario.tmp").exists());
    }

    #[test]
    fn hand_edited_file_is_trimmed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scenario");
        fs::write(&path, "  empty\n").unwrap();

        let slot = FileScenarioSlot::new(&path);
        assert_eq!(slot.read().unwrap().as_deref(), Some("empty"));
    }

    #[test]
    fn blank_file_reads_as_absent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scenario");
        fs::write(&path, "\n").unwrap();

        assert_eq!(FileScenarioSlot::new(&path).read().unwrap(), None);
    }

    #[test]
    fn clear_removes_file_and_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let slot = FileScenarioSlot::new(dir.path().join("scenario"));

        slot.write("server-error").unwrap();
        slot.clear().unwrap();
        assert!(!slot.path().exists());
        slot.clear().unwrap();
    }
}
