//! Extraction of a whole publication page
//!
//! Landmarks on a publication page:
//! - `.bold.fl`: business name
//! - `[data-location]`: entity-encoded JSON with `lat`/`lng`
//! - `.category.kw.mb30 span`: category names
//! - `.information.mb30 p`: free-text description
//! - contacts, address and opening hours (see the sibling modules)

use super::{
    attr_of, extract_address, extract_contacts, extract_timetable, parse_document, select_all,
    select_first, text_of,
};
use crate::model::{Coordinates, Publication};
use scraper::{Html, Node};
use serde::Deserialize;

/// Marker inserted in the information text for each `<br>`
pub const LINE_BREAK: &str = "\n\r";

/// Paragraphs shorter than this (in characters) are noise
const MIN_PARAGRAPH_CHARS: usize = 3;

/// Parses a publication page and extracts every facet
///
/// # Arguments
///
/// * `html` - The publication page body
/// * `url` - Absolute URL the page was fetched from; stored as the record identity
pub fn extract_publication(html: &str, url: &str) -> Publication {
    let document = parse_document(html);
    let contacts = extract_contacts(&document);

    Publication {
        name: extract_name(&document),
        phones: contacts.phones,
        mails: contacts.emails,
        address: extract_address(&document),
        coordinates: extract_coordinates(&document),
        webs: contacts.webs,
        categories: extract_categories(&document),
        timetable: extract_timetable(&document),
        url: url.to_string(),
        information: extract_information(&document),
    }
}

/// Text of the first title element (`.bold.fl`)
pub fn extract_name(document: &Html) -> String {
    select_first(document.root_element(), ".bold.fl")
        .map(|title| text_of(title).trim().to_string())
        .unwrap_or_default()
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LocationAttr {
    lat: f64,
    lng: f64,
}

/// Coordinates from the first `data-location` attribute
///
/// Missing or unparsable data yields the zero coordinate.
pub fn extract_coordinates(document: &Html) -> Coordinates {
    let Some(element) = select_first(document.root_element(), "[data-location]") else {
        return Coordinates::default();
    };
    let raw = attr_of(element, "data-location").unwrap_or_default();
    let json = raw.replace("&quot;", "\"");

    match serde_json::from_str::<LocationAttr>(&json) {
        Ok(location) => Coordinates {
            latitude: location.lat,
            longitude: location.lng,
        },
        Err(e) => {
            tracing::debug!("Unparsable data-location '{}': {}", raw, e);
            Coordinates::default()
        }
    }
}

/// Names listed in the category section
pub fn extract_categories(document: &Html) -> Vec<String> {
    let mut categories = Vec::new();
    for section in select_all(document.root_element(), ".category.kw.mb30") {
        for span in select_all(section, "span") {
            categories.push(text_of(span).trim().to_string());
        }
    }
    categories
}

/// Free-text description, with [`LINE_BREAK`] for every `<br>`
pub fn extract_information(document: &Html) -> String {
    let mut information = String::new();

    for paragraph in select_all(document.root_element(), ".information.mb30 p") {
        if text_of(paragraph).chars().count() < MIN_PARAGRAPH_CHARS {
            continue;
        }
        for node in paragraph.descendants() {
            match node.value() {
                Node::Text(text) => information.push_str(text),
                Node::Element(element) if element.name() == "br" => {
                    information.push_str(LINE_BREAK)
                }
                _ => {}
            }
        }
    }

    information
}
