//! Scoped access to one page directory of the scraper's output.
//!
//! A [`PageScope`] stands in for "the current directory" while a page is
//! checked. It holds the absolute page path and every file lookup is
//! resolved against it, so the process working directory is never touched
//! and an early return cannot leave the next page or case looking in the
//! wrong place.

use crate::errors::CheckError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, instrument, warn};

#[derive(Debug)]
pub struct PageScope {
    dir: PathBuf,
}

impl PageScope {
    /// Enter `root/name`, which must exist and be a directory.
    #[instrument(level = "debug", skip(root))]
    pub async fn enter(root: &Path, name: &str) -> Result<Self, CheckError> {
        let joined = root.join(name);
        let dir = std::path::absolute(&joined).unwrap_or(joined);
        match fs::metadata(&dir).await {
            Err(e) => {
                debug!(path = %dir.display(), error = %e, "Page directory not found");
                Err(CheckError::MissingDirectory(dir))
            }
            Ok(meta) if !meta.is_dir() => Err(CheckError::InvalidDirectory(dir)),
            Ok(_) => {
                debug!(path = %dir.display(), "Entered page directory");
                Ok(Self { dir })
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Absolute path of `file_name` inside this directory.
    pub fn resolve(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    /// Number of entries named `*<extension>`, hidden names excluded.
    pub async fn count_files(&self, extension: &str) -> Result<usize, CheckError> {
        let mut entries = fs::read_dir(&self.dir)
            .await
            .map_err(|_| CheckError::UnreadablePath(self.dir.clone()))?;
        let mut count = 0;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|_| CheckError::UnreadablePath(self.dir.clone()))?
        {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.ends_with(extension) && !name.starts_with('.') {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Read `file_name` as raw bytes and decode it as UTF-8.
    pub async fn read_utf8(&self, file_name: &str) -> Result<String, CheckError> {
        let path = self.resolve(file_name);
        match fs::metadata(&path).await {
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(CheckError::MissingFile(path)),
            Err(_) => return Err(CheckError::UnreadablePath(path)),
            Ok(meta) if meta.is_dir() => return Err(CheckError::UnreadablePath(path)),
            Ok(_) => {}
        }
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read article file");
                return Err(CheckError::UnreadablePath(path));
            }
        };
        String::from_utf8(bytes).map_err(|_| CheckError::Encoding(path))
    }

    /// Leave the directory, removing it when `remove` is set.
    ///
    /// Removal is best-effort: a failure is logged and otherwise ignored.
    pub async fn finish(self, remove: bool) {
        if !remove {
            return;
        }
        match fs::remove_dir_all(&self.dir).await {
            Ok(()) => info!(path = %self.dir.display(), "Removed checked page directory"),
            Err(e) => warn!(
                path = %self.dir.display(),
                error = %e,
                "Could not remove page directory; please make it removable"
            ),
        }
    }
}
