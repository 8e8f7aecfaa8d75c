//! Reference extractor for the [Nature](https://www.nature.com) article listing.
//!
//! # Listing pages
//!
//! Every entry on `/nature/articles?...&page=N` is an `<article>` holding a
//! type marker (`<span data-test="article.type">`) and a "view article" link.
//! Links are relative and are resolved against the listing page's origin,
//! e.g. `/articles/d41586-020-00001-1` becomes
//! `https://www.nature.com/articles/d41586-020-00001-1`.
//!
//! # Detail pages
//!
//! The title is the first `h1` whose first class names both the article and
//! title roles; the body is the teaser paragraph (`p.article__teaser`).

use crate::errors::CheckError;
use crate::models::ArticleRecord;
use crate::scrapers::PageFetcher;
use crate::scrapers::predicates::{
    element_text, is_article_container, is_article_title_heading, is_article_type_marker,
    is_teaser_paragraph, is_view_article_link,
};
use crate::utils::truncate_for_log;
use scraper::{ElementRef, Html};
use tracing::{debug, info, instrument};
use url::Url;

/// Re-derives the expected articles by scraping the live site.
#[derive(Debug)]
pub struct ReferenceExtractor<F> {
    fetcher: F,
}

impl<F: PageFetcher> ReferenceExtractor<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Detail-page URLs of every entry on `listing_url` whose type label is
    /// exactly `article_type`, in document order.
    ///
    /// An empty result is valid: the page simply has no articles of that type.
    #[instrument(level = "info", skip_all, fields(%listing_url, %article_type))]
    pub async fn get_article_links_of_type(
        &self,
        listing_url: &Url,
        article_type: &str,
    ) -> Result<Vec<Url>, CheckError> {
        let html = self.fetcher.fetch_text(listing_url).await?;
        let links = parse_article_links(&html, listing_url, article_type)?;
        info!(count = links.len(), article_type, "Indexed reference article links");
        debug!(links = ?links.iter().map(Url::as_str).collect::<Vec<_>>(), "Reference links");
        Ok(links)
    }

    /// Title and teaser body of one detail page, both trimmed.
    #[instrument(level = "info", skip_all, fields(%detail_url))]
    pub async fn get_article_title_and_content(
        &self,
        detail_url: &Url,
    ) -> Result<ArticleRecord, CheckError> {
        let html = self.fetcher.fetch_text(detail_url).await?;
        let record = parse_article_record(&html, detail_url)?;
        info!(
            title = %record.title,
            body = %truncate_for_log(&record.body, 120),
            "Parsed reference article"
        );
        Ok(record)
    }
}

fn elements(doc: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    doc.root_element().descendants().filter_map(ElementRef::wrap)
}

/// Listing-page half of the extractor, without the network.
pub fn parse_article_links(
    html: &str,
    listing_url: &Url,
    article_type: &str,
) -> Result<Vec<Url>, CheckError> {
    let document = Html::parse_document(html);
    let origin = Url::parse(&listing_url.origin().ascii_serialization())
        .unwrap_or_else(|_| listing_url.clone());

    elements(&document)
        .filter(is_article_type_marker)
        .filter(|marker| element_text(marker).trim() == article_type)
        .map(|marker| {
            let container = marker
                .ancestors()
                .filter_map(ElementRef::wrap)
                .find(is_article_container)
                .ok_or_else(|| CheckError::extraction(listing_url, "article container"))?;
            let href = container
                .descendants()
                .filter_map(ElementRef::wrap)
                .find(is_view_article_link)
                .and_then(|link| link.value().attr("href"))
                .ok_or_else(|| CheckError::extraction(listing_url, "\"view article\" link"))?;
            origin.join(href).map_err(|source| CheckError::InvalidUrl {
                url: href.to_string(),
                source,
            })
        })
        .collect()
}

/// Detail-page half of the extractor, without the network.
pub fn parse_article_record(html: &str, detail_url: &Url) -> Result<ArticleRecord, CheckError> {
    let document = Html::parse_document(html);
    let title = elements(&document)
        .find(is_article_title_heading)
        .map(|el| element_text(&el))
        .ok_or_else(|| CheckError::extraction(detail_url, "article title"))?;
    let body = elements(&document)
        .find(is_teaser_paragraph)
        .map(|el| element_text(&el))
        .ok_or_else(|| CheckError::extraction(detail_url, "article teaser"))?;
    Ok(ArticleRecord::new(&title, &body))
}
