//! Element predicates for the Nature listing and detail pages.
//!
//! Each predicate is a plain function over an immutable [`ElementRef`], so
//! they compose with iterator adapters (`filter`, `find`) over
//! `descendants()` or `ancestors()` without any selector state.

use scraper::ElementRef;

/// `<span data-test="article.type">News</span>` on a listing page.
pub fn is_article_type_marker(el: &ElementRef) -> bool {
    el.value().name() == "span" && el.value().attr("data-test") == Some("article.type")
}

/// The "view article" action inside a listing entry; its `href` is the
/// detail-page link.
pub fn is_view_article_link(el: &ElementRef) -> bool {
    el.value().attr("data-track-action") == Some("view article")
}

/// Listing entries are wrapped in an `<article>` container.
pub fn is_article_container(el: &ElementRef) -> bool {
    el.value().name() == "article"
}

/// Detail-page headline: an `h1` whose first class mentions both roles,
/// e.g. `c-article-title` or `article-item__title`.
pub fn is_article_title_heading(el: &ElementRef) -> bool {
    el.value().name() == "h1"
        && el
            .value()
            .attr("class")
            .and_then(|classes| classes.split_whitespace().next())
            .is_some_and(|class| class.contains("article") && class.contains("title"))
}

/// Detail-page teaser: `<p class="article__teaser">`.
pub fn is_teaser_paragraph(el: &ElementRef) -> bool {
    el.value().name() == "p" && el.value().classes().any(|class| class == "article__teaser")
}

/// All text under an element, concatenated in document order.
pub fn element_text(el: &ElementRef) -> String {
    el.text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn elements(html: &str) -> (Html, Vec<String>) {
        let doc = Html::parse_fragment(html);
        let names = doc
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .map(|e| e.value().name().to_string())
            .collect();
        (doc, names)
    }

    fn first_matching(doc: &Html, pred: fn(&ElementRef) -> bool) -> Option<String> {
        doc.root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|e| pred(e))
            .map(|e| element_text(&e))
    }

    #[test]
    fn test_article_type_marker() {
        let (doc, _) = elements(
            r#"<div><span data-test="other">x</span><span data-test="article.type">News</span>
               <div data-test="article.type">Not a span</div></div>"#,
        );
        let found: Vec<String> = doc
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(is_article_type_marker)
            .map(|e| element_text(&e))
            .collect();
        assert_eq!(found, vec!["News".to_string()]);
    }

    #[test]
    fn test_view_article_link() {
        let (doc, _) = elements(
            r#"<a data-track-action="download pdf" href="/a.pdf">pdf</a>
               <a data-track-action="view article" href="/articles/abc">Read</a>"#,
        );
        assert_eq!(first_matching(&doc, is_view_article_link).as_deref(), Some("Read"));
    }

    #[test]
    fn test_article_title_heading_uses_first_class() {
        let (doc, _) = elements(
            r#"<h1 class="page-header">Site</h1>
               <h1 class="other c-article-title">Wrong</h1>
               <h1 class="c-article-title extra">Right</h1>"#,
        );
        assert_eq!(
            first_matching(&doc, is_article_title_heading).as_deref(),
            Some("Right")
        );
    }

    #[test]
    fn test_article_title_heading_requires_h1() {
        let (doc, _) = elements(r#"<h2 class="c-article-title">Sub</h2>"#);
        assert_eq!(first_matching(&doc, is_article_title_heading), None);
    }

    #[test]
    fn test_teaser_paragraph() {
        let (doc, _) = elements(
            r#"<p class="lead">No</p><p class="intro article__teaser">Teaser body</p>"#,
        );
        assert_eq!(
            first_matching(&doc, is_teaser_paragraph).as_deref(),
            Some("Teaser body")
        );
    }

    #[test]
    fn test_article_container_is_found_from_marker() {
        let (doc, names) = elements(
            r#"<section><article class="entry"><div><span data-test="article.type">News</span></div></article></section>"#,
        );
        assert!(names.contains(&"article".to_string()));
        let marker = doc
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(is_article_type_marker)
            .unwrap();
        let container = marker
            .ancestors()
            .filter_map(ElementRef::wrap)
            .find(is_article_container)
            .unwrap();
        assert_eq!(container.value().attr("class"), Some("entry"));
    }

    #[test]
    fn test_element_text_concatenates_children() {
        let (doc, _) = elements(r#"<p class="article__teaser">One <b>two</b> three</p>"#);
        assert_eq!(
            first_matching(&doc, is_teaser_paragraph).as_deref(),
            Some("One two three")
        );
    }
}
