//! Command-line interface definitions for the checker.
//!
//! A case is given either inline (`--pages` with `--article-type`) or as the
//! two-line stdin form the grading harness sends (`--stdin`).

use crate::models::{CaseParseError, TestCase};
use crate::validator::picker::SpotCheck;
use clap::Parser;
use std::path::PathBuf;

/// Check a Nature scraper's `Page_<i>` output against the live site.
///
/// # Examples
///
/// ```sh
/// # One page of "News" articles in the current directory
/// nature_scrape_checker --pages 1 --article-type News
///
/// # Case from the harness, output tree elsewhere, reproducible spot-check
/// printf '2\nNews Feature\n' | nature_scrape_checker --stdin --root ./out --seed 7
///
/// # Remove leftover page directories before running a scraper
/// nature_scrape_checker --clean
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory holding the Page_<i> folders (defaults to the current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Number of listing pages to check
    #[arg(long, requires = "article_type")]
    pub pages: Option<u32>,

    /// Article type label, matched exactly (e.g. "News", "News Feature")
    #[arg(long, requires = "pages")]
    pub article_type: Option<String>,

    /// Read the case from stdin as "<pages>\n<article type>"
    #[arg(long, conflicts_with_all = ["pages", "article_type"])]
    pub stdin: bool,

    /// Seed for the spot-check article choice
    #[arg(long, env = "CHECKER_SEED")]
    pub seed: Option<u64>,

    /// Always spot-check the article at this index (wrapped into range)
    #[arg(long, conflicts_with = "seed")]
    pub pick: Option<usize>,

    /// Keep page directories after they pass
    #[arg(long)]
    pub keep_output: bool,

    /// Print the verdict as JSON
    #[arg(long)]
    pub json: bool,

    /// Remove existing page directories under the root and exit
    #[arg(long, conflicts_with_all = ["pages", "article_type", "stdin"])]
    pub clean: bool,

    /// Print the standard cases in stdin form and exit
    #[arg(long)]
    pub list_cases: bool,
}

impl Cli {
    pub fn spot_check(&self) -> SpotCheck {
        match self.pick {
            Some(index) => SpotCheck::Fixed(index),
            None => SpotCheck::from_seed(self.seed),
        }
    }

    /// The inline case, if `--pages` and `--article-type` were given.
    pub fn inline_case(&self) -> Option<Result<TestCase, CaseParseError>> {
        match (self.pages, &self.article_type) {
            (Some(pages), Some(article_type)) => Some(TestCase::new(pages, article_type.clone())),
            _ => None,
        }
    }
}
