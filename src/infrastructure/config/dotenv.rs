//! Optional `.env` file source
//!
//! The file is parsed without touching the process environment, so the
//! loader decides precedence itself instead of relying on which value
//! `dotenvy::dotenv()` happened to leave behind.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

/// `KEY=VALUE` file read from a directory
#[derive(Debug, Clone)]
pub struct DotenvFile {
    path: PathBuf,
}

impl DotenvFile {
    /// File at an exact path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Locate `file_name` inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>, file_name: &str) -> Self {
        Self::new(dir.as_ref().join(file_name))
    }

    /// Location of the file, whether or not it exists
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every entry in the file.
    ///
    /// Errors cover a missing file, an unreadable file and a line that is
    /// not valid dotenv syntax. A later duplicate key replaces an earlier one.
    pub fn read(&self) -> Result<BTreeMap<String, String>, dotenvy::Error> {
        let mut entries = BTreeMap::new();
        for item in dotenvy::from_path_iter(&self.path)? {
            let (key, value) = item?;
            entries.insert(key, value);
        }

        debug!(
            path = %self.path.display(),
            entries = entries.len(),
            "read configuration file"
        );
        Ok(entries)
    }
}
