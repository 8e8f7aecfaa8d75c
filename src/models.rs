//! Data models passed between the extractor, the validator and the CLI.
//!
//! - [`ArticleRecord`]: title and body scraped from one detail page
//! - [`TestCase`]: how many listing pages to check and which article type
//! - [`Verdict`]: the printable outcome of one case

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The canonical title and body of one article, both trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRecord {
    pub title: String,
    pub body: String,
}

impl ArticleRecord {
    pub fn new(title: &str, body: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            body: body.trim().to_string(),
        }
    }
}

/// One `(page_count, article_type)` pair to verify.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TestCase {
    /// Number of listing pages, checked as `1..=pages`.
    pub pages: u32,
    /// Exact type label, e.g. `"News"` or `"News Feature"`.
    pub article_type: String,
}

impl TestCase {
    pub fn new(pages: u32, article_type: impl Into<String>) -> Result<Self, CaseParseError> {
        let article_type = article_type.into();
        if pages == 0 {
            return Err(CaseParseError::ZeroPages);
        }
        if article_type.trim().is_empty() {
            return Err(CaseParseError::EmptyArticleType);
        }
        Ok(Self {
            pages,
            article_type,
        })
    }

    /// The cases run when none are given on the command line.
    pub fn defaults() -> Vec<TestCase> {
        vec![
            TestCase {
                pages: 1,
                article_type: "News".to_string(),
            },
            TestCase {
                pages: 2,
                article_type: "News Feature".to_string(),
            },
        ]
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} page(s) of \"{}\"", self.pages, self.article_type)
    }
}

/// Errors from reading a case off line-delimited input.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CaseParseError {
    #[error("missing page count line")]
    MissingPages,
    #[error("page count '{0}' is not a positive integer")]
    BadPages(String),
    #[error("page count must be at least 1")]
    ZeroPages,
    #[error("missing article type line")]
    MissingArticleType,
    #[error("article type must not be empty")]
    EmptyArticleType,
}

/// Parses the line-delimited form `"<page_count>\n<article_type>"`.
///
/// The label line is trimmed of its line ending and surrounding whitespace;
/// inner spaces are kept (`"News Feature"`).
impl FromStr for TestCase {
    type Err = CaseParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().map(str::trim).filter(|l| !l.is_empty());
        let pages_line = lines.next().ok_or(CaseParseError::MissingPages)?;
        let pages = pages_line
            .parse::<u32>()
            .map_err(|_| CaseParseError::BadPages(pages_line.to_string()))?;
        let article_type = lines.next().ok_or(CaseParseError::MissingArticleType)?;
        TestCase::new(pages, article_type)
    }
}

/// Outcome of one case, as printed by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub pages: u32,
    pub article_type: String,
    pub passed: bool,
    /// Human-readable explanation, present only on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    /// Whether re-running the check could change the outcome.
    #[serde(default)]
    pub retryable: bool,
}

impl Verdict {
    pub fn correct(case: &TestCase) -> Self {
        Self {
            pages: case.pages,
            article_type: case.article_type.clone(),
            passed: true,
            feedback: None,
            retryable: false,
        }
    }

    pub fn wrong(case: &TestCase, err: &crate::errors::CheckError) -> Self {
        Self {
            pages: case.pages,
            article_type: case.article_type.clone(),
            passed: false,
            feedback: Some(err.to_string()),
            retryable: err.is_retryable(),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.feedback {
            None => write!(f, "CORRECT: {} page(s) of \"{}\"", self.pages, self.article_type),
            Some(feedback) => write!(
                f,
                "WRONG: {} page(s) of \"{}\"\n{}",
                self.pages, self.article_type, feedback
            ),
        }
    }
}
