//! Failure taxonomy for a single check.
//!
//! Every variant short-circuits the running case. The `Display` text is the
//! feedback shown to whoever submitted the scraper output, so it names the
//! offending path or URL and, where it applies, the expected and actual values.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    /// The live site could not be reached. Re-running the check may help.
    #[error(
        "A connection error occurred when the checker tried to reach the page '{url}' ({reason}).\n\
         Please try running the check again."
    )]
    Fetch { url: String, reason: String },

    /// The page was fetched but did not have the expected HTML shape.
    #[error(
        "The checker could not find the {what} on the page '{url}'.\n\
         The page layout may have changed. Retry submitting your solution."
    )]
    Extraction { url: String, what: String },

    #[error("Impossible to find directory {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("The directory name is incorrect: {} is not a directory.", .0.display())]
    InvalidDirectory(PathBuf),

    #[error(
        "A wrong number of files with articles was found in the directory {}.\n\
         {found} files were found, {expected} files were expected.",
        .dir.display()
    )]
    CountMismatch {
        dir: PathBuf,
        found: usize,
        expected: usize,
    },

    #[error("A file with the title {} was expected, but was not found.", .0.display())]
    MissingFile(PathBuf),

    #[error(
        "An error occurred when the checker tried to read the file \"{}\".\n\
         Please make sure you save your file in binary format\n\
         and encode the saved data using utf-8 encoding.",
        .0.display()
    )]
    Encoding(PathBuf),

    #[error(
        "An error occurred when the checker tried to read the file \"{}\".\n\
         Make sure you didn't create a folder with the same name as the file.",
        .0.display()
    )]
    UnreadablePath(PathBuf),

    #[error(
        "Some of the files do not contain the expected article's body.\n\
         The checker expected the following article:\n\
         \"{expected}\"\n\
         However, the following text was found in the file {}:\n\
         \"{actual}\"",
        .path.display()
    )]
    ContentMismatch {
        expected: String,
        actual: String,
        path: PathBuf,
    },

    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl CheckError {
    /// Only transport failures are worth a human re-run; everything else is
    /// a property of the submitted output or of the site layout.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CheckError::Fetch { .. })
    }

    pub(crate) fn fetch(url: impl ToString, reason: impl ToString) -> Self {
        CheckError::Fetch {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn extraction(url: impl ToString, what: &str) -> Self {
        CheckError::Extraction {
            url: url.to_string(),
            what: what.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_mismatch_message() {
        let err = CheckError::CountMismatch {
            dir: PathBuf::from("/tmp/Page_1"),
            found: 2,
            expected: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/Page_1"));
        assert!(msg.contains("2 files were found, 3 files were expected"));
    }

    #[test]
    fn test_content_mismatch_shows_both_texts() {
        let err = CheckError::ContentMismatch {
            expected: "the cat sat".to_string(),
            actual: "the dog sat".to_string(),
            path: PathBuf::from("Title.txt"),
        };
        let msg = err.to_string();
        assert!(msg.contains("\"the cat sat\""));
        assert!(msg.contains("\"the dog sat\""));
        assert!(msg.contains("Title.txt"));
    }

    #[test]
    fn test_only_fetch_is_retryable() {
        assert!(CheckError::fetch("https://example.com", "timed out").is_retryable());
        assert!(!CheckError::extraction("https://example.com", "article title").is_retryable());
        assert!(!CheckError::MissingFile(PathBuf::from("a.txt")).is_retryable());
    }
}
