//! Best-effort removal of page directories left over from earlier runs.
//!
//! Nothing here fails a check: every removal error is logged and skipped.

use std::path::Path;
use tokio::fs;
use tracing::{info, instrument, warn};

/// Remove every directory in `root` whose name starts with `prefix`.
///
/// Returns how many directories were removed.
#[instrument(level = "info", skip_all, fields(root = %root.display(), %prefix))]
pub async fn remove_page_dirs(root: &Path, prefix: &str) -> usize {
    let mut entries = match fs::read_dir(root).await {
        Ok(entries) => entries,
        Err(e) => {
            warn!(error = %e, "Could not list output root");
            return 0;
        }
    };

    let mut removed = 0;
    loop {
        let entry = match entries.next_entry().await {
            Ok(Some(entry)) => entry,
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "Stopped listing output root");
                break;
            }
        };
        let path = entry.path();
        let is_page_dir = entry.file_name().to_string_lossy().starts_with(prefix)
            && entry.file_type().await.is_ok_and(|t| t.is_dir());
        if !is_page_dir {
            continue;
        }
        match fs::remove_dir_all(&path).await {
            Ok(()) => removed += 1,
            Err(e) => warn!(
                path = %path.display(),
                error = %e,
                "Could not remove directory; please make it removable"
            ),
        }
    }
    info!(removed, "Removed leftover page directories");
    removed
}
