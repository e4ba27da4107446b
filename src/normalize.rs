//! Field cleanup shared by the extractors, the cache and the report writer

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Characters replaced by `_` when a category name becomes a file name
const FILE_NAME_SEPARATORS: &[char] = &[' ', '(', ')', '+', '.', '%'];

/// Cleans a phone number or category name
///
/// # Normalization Steps
///
/// 1. Trim surrounding spaces
/// 2. Remove spaces, hyphens and dots
/// 3. Turn tabs, carriage returns and line feeds into spaces
/// 4. Trim surrounding spaces again
///
/// # Examples
///
/// ```
/// use yellowpages_crawler::normalize::clean_field;
///
/// assert_eq!(clean_field(" 099 123-456.\t"), "099123456");
/// ```
pub fn clean_field(value: &str) -> String {
    value
        .trim_matches(' ')
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.'))
        .map(|c| match c {
            '\t' | '\r' | '\n' => ' ',
            other => other,
        })
        .collect::<String>()
        .trim_matches(' ')
        .to_string()
}

/// Folds accented characters to their base letter
///
/// Decomposes canonically, drops combining marks and recomposes.
///
/// # Examples
///
/// ```
/// use yellowpages_crawler::normalize::remove_accents;
///
/// assert_eq!(remove_accents("Montevideo Ñandú"), "Montevideo Nandu");
/// ```
pub fn remove_accents(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .collect()
}

/// File stem used for a category's cache files
///
/// Two names that clean to the same stem share cache files.
pub fn cache_file_stem(category_name: &str) -> String {
    clean_field(category_name)
        .chars()
        .map(|c| {
            if FILE_NAME_SEPARATORS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect()
}
