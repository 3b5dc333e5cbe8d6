//! Validation result persistence.
//!
//! Each checkpoint run is stored as one pretty-printed JSON file named by
//! its run identifier under `<base>/validations/`. The store is append-only;
//! past runs are never rewritten.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use expectations_validator::CheckpointResult;

use crate::error::Result;

/// Append-only store of checkpoint run results.
#[derive(Debug, Clone)]
pub struct ValidationStore {
    base_dir: PathBuf,
}

impl ValidationStore {
    /// Creates a store rooted at the given directory.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn validations_dir(&self) -> PathBuf {
        self.base_dir.join("validations")
    }

    /// Persists one run result, returning the written path.
    pub fn save(&self, result: &CheckpointResult) -> Result<PathBuf> {
        let dir = self.validations_dir();
        fs::create_dir_all(&dir)?;

        let path = dir.join(format!("{}.json", result.run_id()));
        let json = serde_json::to_string_pretty(result)?;
        fs::write(&path, json)?;

        debug!(path = %path.display(), "stored validation result");
        Ok(path)
    }

    /// Loads one stored result.
    pub fn load(&self, path: &Path) -> Result<CheckpointResult> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Loads all stored results, most recent first.
    ///
    /// Files that are not readable result JSON are skipped.
    pub fn list(&self) -> Result<Vec<CheckpointResult>> {
        let dir = self.validations_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut results = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match self.load(&path) {
                Ok(result) => results.push(result),
                Err(error) => {
                    debug!(path = %path.display(), %error, "skipping unreadable result file");
                }
            }
        }

        results.sort_by(|a, b| b.run_time.cmp(&a.run_time));
        Ok(results)
    }
}
