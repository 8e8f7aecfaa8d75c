//! Verification of a scraper's on-disk output against the live site.
//!
//! For each page `1..=pages` of a [`TestCase`], in order:
//!
//! 1. Enter `<root>/Page_<i>` ([`scope::PageScope`])
//! 2. Count the article files
//! 3. Scrape the listing page for links of the requested type
//! 4. Compare the counts
//! 5. Spot-check one random article: derive its filename from the scraped
//!    title, read the file and compare the whitespace-normalized bodies
//!
//! The first failure ends the case; there is no partial credit.

pub mod picker;
pub mod scope;

use crate::config::CheckerConfig;
use crate::errors::CheckError;
use crate::models::TestCase;
use crate::scrapers::PageFetcher;
use crate::scrapers::nature::ReferenceExtractor;
use crate::utils::{expected_filename, normalize_body, strip_line_breaks, truncate_for_log};
use picker::SpotCheck;
use scope::PageScope;
use std::path::PathBuf;
use tracing::{info, instrument, warn};

pub struct OutputValidator<F> {
    extractor: ReferenceExtractor<F>,
    config: CheckerConfig,
    /// Directory holding the `Page_<i>` folders.
    root: PathBuf,
    picker: SpotCheck,
}

impl<F: PageFetcher> OutputValidator<F> {
    pub fn new(
        extractor: ReferenceExtractor<F>,
        config: CheckerConfig,
        root: PathBuf,
        picker: SpotCheck,
    ) -> Self {
        Self {
            extractor,
            config,
            root,
            picker,
        }
    }

    /// Check every page of `case`, stopping at the first failure.
    #[instrument(level = "info", skip_all, fields(pages = case.pages, article_type = %case.article_type))]
    pub async fn run_case(&mut self, case: &TestCase) -> Result<(), CheckError> {
        for page in 1..=case.pages {
            if let Err(e) = self.check_page(page, &case.article_type).await {
                warn!(page, retryable = e.is_retryable(), error = %truncate_for_log(&e.to_string(), 300), "Case failed");
                return Err(e);
            }
        }
        info!("Case correct");
        Ok(())
    }

    /// Check a single 1-based page.
    #[instrument(level = "info", skip(self))]
    pub async fn check_page(&mut self, page: u32, article_type: &str) -> Result<(), CheckError> {
        let extension = self.config.file_extension.as_str();
        let scope = PageScope::enter(&self.root, &self.config.page_dir_name(page)).await?;
        let found = scope.count_files(extension).await?;

        let listing_url = self.config.listing_url(page)?;
        let links = self
            .extractor
            .get_article_links_of_type(&listing_url, article_type)
            .await?;

        if found != links.len() {
            return Err(CheckError::CountMismatch {
                dir: scope.path().to_path_buf(),
                found,
                expected: links.len(),
            });
        }
        info!(count = found, "File count matches");

        if !links.is_empty() {
            let index = self.picker.pick(links.len());
            let record = self
                .extractor
                .get_article_title_and_content(&links[index])
                .await?;

            let file_name = expected_filename(&record.title, extension);
            let actual = scope.read_utf8(&file_name).await?;

            if normalize_body(&actual) != normalize_body(&record.body) {
                return Err(CheckError::ContentMismatch {
                    expected: strip_line_breaks(&record.body),
                    actual: strip_line_breaks(&actual),
                    path: scope.resolve(&file_name),
                });
            }
            info!(file = %file_name, "Article body matches");
        } else {
            info!("No articles of this type on the page; skipping content check");
        }

        scope.finish(self.config.cleanup).await;
        Ok(())
    }
}
