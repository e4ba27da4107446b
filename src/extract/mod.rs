//! Markup extraction for directory pages
//!
//! Every extractor is a pure function from a parsed document to one facet of
//! a record, so each can be exercised with a fixture page. They all go
//! through the small query layer in this module rather than walking the
//! tree by hand.
//!
//! Page landmarks:
//! - Category index pages list categories under `.t-p0`
//! - Category pages list publications under `.results-list__item`
//! - Publication pages carry the detail facets (see [`publication`])

mod address;
mod contacts;
mod listing;
mod publication;
mod timetable;

pub use address::extract_address;
pub use contacts::{extract_contacts, Contacts};
pub use listing::{extract_category_links, extract_publication_links};
pub use publication::{
    extract_categories, extract_coordinates, extract_information, extract_name,
    extract_publication, LINE_BREAK,
};
pub use timetable::extract_timetable;

use scraper::{ElementRef, Html, Selector};

/// Parses an HTML page into a document the extractors can query
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

fn parse_selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            tracing::warn!("Invalid selector '{}': {:?}", css, e);
            None
        }
    }
}

/// Returns every element under `scope` matching `css`, in document order
pub(crate) fn select_all<'a>(scope: ElementRef<'a>, css: &str) -> Vec<ElementRef<'a>> {
    let Some(selector) = parse_selector(css) else {
        return Vec::new();
    };
    scope.select(&selector).collect()
}

/// Returns the first element under `scope` matching `css`
pub(crate) fn select_first<'a>(scope: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let selector = parse_selector(css)?;
    scope.select(&selector).next()
}

/// Concatenated text of an element and its descendants
pub(crate) fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Value of an attribute on an element
pub(crate) fn attr_of<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_all_in_document_order() {
        let doc = parse_document(r#"<ul><li class="x">a</li><li>b</li><li class="x">c</li></ul>"#);
        let texts: Vec<String> = select_all(doc.root_element(), "li.x")
            .into_iter()
            .map(text_of)
            .collect();
        assert_eq!(texts, vec!["a", "c"]);
    }

    #[test]
    fn test_select_first_missing() {
        let doc = parse_document("<p>nothing here</p>");
        assert!(select_first(doc.root_element(), ".absent").is_none());
    }

    #[test]
    fn test_invalid_selector_matches_nothing() {
        let doc = parse_document("<p>text</p>");
        assert!(select_all(doc.root_element(), "p[").is_empty());
    }

    #[test]
    fn test_text_of_nested_elements() {
        let doc = parse_document("<div id='d'>Hola <b>mundo</b>!</div>");
        let div = select_first(doc.root_element(), "#d").unwrap();
        assert_eq!(text_of(div), "Hola mundo!");
    }

    #[test]
    fn test_attr_of() {
        let doc = parse_document(r#"<a href="/q_bares/">Bares</a>"#);
        let link = select_first(doc.root_element(), "a").unwrap();
        assert_eq!(attr_of(link, "href"), Some("/q_bares/"));
        assert_eq!(attr_of(link, "title"), None);
    }
}
