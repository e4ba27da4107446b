//! CSV report generation
//!
//! One row per publication. Free-text columns are accent-folded; the JSON
//! cache keeps the original spelling.

use crate::model::{Phone, Publication, Timetable};
use crate::normalize::remove_accents;
use crate::output::OutputResult;
use std::path::Path;

/// Column names of the report, in order
pub const CSV_HEADER: [&str; 15] = [
    "name",
    "categories",
    "information",
    "url",
    "phones",
    "mails",
    "address_type",
    "street",
    "number",
    "locality",
    "zip",
    "city",
    "coordinates",
    "webs",
    "timetable",
];

/// Separator between the items of a list column
pub const LIST_SEPARATOR: &str = " | ";

/// Writes the report to `output_path`, creating its directory if needed
///
/// # Arguments
///
/// * `publications` - Records to write, in order
/// * `output_path` - Path of the CSV file
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the report
/// * `Err(OutputError)` - Failed to create or write the file
pub fn write_csv(publications: &[Publication], output_path: &Path) -> OutputResult<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(output_path)?;
    writer.write_record(CSV_HEADER)?;
    for publication in publications {
        writer.write_record(publication_row(publication))?;
    }
    writer.flush()?;

    tracing::info!(
        "Wrote {} publications to {}",
        publications.len(),
        output_path.display()
    );

    Ok(())
}

/// Flattens a publication into the report's columns
pub fn publication_row(publication: &Publication) -> [String; 15] {
    let address = &publication.address;
    [
        remove_accents(&publication.name),
        remove_accents(&publication.categories.join(LIST_SEPARATOR)),
        remove_accents(&publication.information),
        publication.url.clone(),
        format_phones(&publication.phones),
        publication.mails.join(LIST_SEPARATOR),
        address.address_type.as_str().to_string(),
        remove_accents(&address.street),
        address.number.clone(),
        remove_accents(&address.locality),
        address.zip.clone(),
        remove_accents(&address.city),
        publication.coordinates.to_string(),
        publication.webs.join(LIST_SEPARATOR),
        format_timetable(&publication.timetable),
    ]
}

/// Renders phones as `MW( number )` tokens
///
/// `M` marks the main number and `W` the WhatsApp number.
pub fn format_phones(phones: &[Phone]) -> String {
    phones
        .iter()
        .map(|phone| {
            let mut token = String::new();
            if phone.is_main {
                token.push('M');
            }
            if phone.has_whatsapp {
                token.push('W');
            }
            token.push_str(&format!("( {} )", phone.number));
            token
        })
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

/// Renders each day as `[ day start -> end | start -> end ]`, days back to back
pub fn format_timetable(timetable: &Timetable) -> String {
    timetable
        .iter()
        .map(|(day, ranges)| {
            let ranges = ranges
                .iter()
                .map(|range| format!("{} -> {}", range.start, range.end))
                .collect::<Vec<_>>()
                .join(LIST_SEPARATOR);
            format!("[ {} {} ]", day, ranges)
        })
        .collect()
}
