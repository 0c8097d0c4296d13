use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};

use bookfind_logging::app_warn;
use tempfile::NamedTempFile;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Session directory error: {0}")]
    SessionDir(String),
    #[error("Session IO error: {0}")]
    Io(#[from] io::Error),
}

/// The stand-in for a browser address bar: one slot, replace-only, read once
/// at startup.
pub trait QueryStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn replace(&self, query: &str) -> Result<(), StoreError>;
}

/// [`QueryStore`] backed by a single file holding the raw query string.
pub struct FileQueryStore {
    path: PathBuf,
}

impl FileQueryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QueryStore for FileQueryStore {
    fn load(&self) -> Option<String> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
            Err(err) => {
                app_warn!("Failed to read session file {:?}: {}", self.path, err);
                return None;
            }
        };

        // The file is hand-editable; a trailing newline is not part of the
        // query.
        let query = content.trim();
        if query.is_empty() {
            return None;
        }
        Some(query.to_string())
    }

    fn replace(&self, query: &str) -> Result<(), StoreError> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        ensure_session_dir(parent)?;

        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(query.as_bytes())?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)
            .map_err(|err| StoreError::Io(err.error))?;
        Ok(())
    }
}

fn ensure_session_dir(dir: &Path) -> Result<(), StoreError> {
    if dir.exists() {
        if dir.is_dir() {
            return Ok(());
        }
        return Err(StoreError::SessionDir(format!(
            "Path exists but is not a directory: {:?}",
            dir
        )));
    }
    std::fs::create_dir_all(dir)
        .map_err(|err| StoreError::SessionDir(format!("Failed to create {:?}: {}", dir, err)))?;
    Ok(())
}
