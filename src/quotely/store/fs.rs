use super::DataStore;
use crate::error::{QuotelyError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(data_dir: P, file_name: &str) -> Self {
        Self {
            path: data_dir.as_ref().join(file_name),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                info!(dir = %parent.display(), "creating data directory");
                fs::create_dir_all(parent).map_err(QuotelyError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no data file yet");
            self.ensure_dir()?;
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(QuotelyError::Io)?;
        Ok(Some(content))
    }

    fn save(&mut self, blob: &str) -> Result<()> {
        self.ensure_dir()?;

        // Write to a sibling temp file, then rename over the target.
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let tmp_path = dir.join(format!(".quotely-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, blob).map_err(QuotelyError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(QuotelyError::Io(e));
        }

        debug!(path = %self.path.display(), bytes = blob.len(), "data saved");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
