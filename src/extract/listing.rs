//! Extraction from the two listing page kinds: the alphabetical category
//! index and a category's page of publications.

use super::{attr_of, parse_document, select_all, text_of};
use crate::model::Category;

/// Extracts the categories listed on a category index page
///
/// The `/1/` page suffix is stripped from each link so the URL can be
/// paginated later.
pub fn extract_category_links(html: &str) -> Vec<Category> {
    let document = parse_document(html);
    let mut categories = Vec::new();

    for list in select_all(document.root_element(), ".t-p0") {
        for link in select_all(list, "li a") {
            let Some(href) = attr_of(link, "href") else {
                continue;
            };
            categories.push(Category::new(
                href.replace("/1/", ""),
                text_of(link).trim(),
            ));
        }
    }

    categories
}

/// Extracts the publication links from one page of a category
pub fn extract_publication_links(html: &str) -> Vec<String> {
    let document = parse_document(html);
    let buttons = select_all(
        document.root_element(),
        ".results-list__item section .button",
    );

    buttons
        .into_iter()
        .filter_map(|button| attr_of(button, "href"))
        .map(str::to_string)
        .collect()
}
