//! Checker configuration.
//!
//! Defaults describe the Nature 2020 article listing the exercise targets.
//! A YAML file passed with `--config` may override any subset of keys:
//!
//! ```yaml
//! base_url: https://www.nature.com/nature/articles
//! year: 2020
//! timeout_secs: 10
//! ```

use crate::errors::CheckError;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::Path;
use tracing::{info, instrument};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Listing endpoint without its query string.
    pub base_url: String,
    pub sort: String,
    pub year: u32,
    /// Page directories are named `<dir_prefix><page>`.
    pub dir_prefix: String,
    /// Suffix of the article files, leading dot included.
    pub file_extension: String,
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Remove page directories before the run and after each passing page.
    pub cleanup: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.nature.com/nature/articles".to_string(),
            sort: "PubDate".to_string(),
            year: 2020,
            dir_prefix: "Page_".to_string(),
            file_extension: ".txt".to_string(),
            timeout_secs: 30,
            user_agent: "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36"
                .to_string(),
            cleanup: true,
        }
    }
}

impl CheckerConfig {
    /// Listing URL for a 1-based page: `<base_url>?sort=..&year=..&page=<page>`.
    pub fn listing_url(&self, page: u32) -> Result<Url, CheckError> {
        let mut url = Url::parse(&self.base_url).map_err(|source| CheckError::InvalidUrl {
            url: self.base_url.clone(),
            source,
        })?;
        url.query_pairs_mut()
            .append_pair("sort", &self.sort)
            .append_pair("year", &self.year.to_string())
            .append_pair("page", &page.to_string());
        Ok(url)
    }

    /// Directory name for a 1-based page index.
    pub fn page_dir_name(&self, page: u32) -> String {
        format!("{}{}", self.dir_prefix, page)
    }
}

/// Load a YAML configuration file. Missing keys take their defaults.
#[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
pub fn load_config(path: impl AsRef<Path>) -> Result<CheckerConfig, Box<dyn Error>> {
    let raw = std::fs::read_to_string(path.as_ref())?;
    let config: CheckerConfig = serde_yaml::from_str(&raw)?;
    info!(base_url = %config.base_url, year = config.year, "Loaded configuration");
    Ok(config)
}
