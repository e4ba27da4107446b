use serde::{Deserialize, Serialize};

/// A directory classification with its own listing pages
///
/// `url` is the site-relative path of the category (for example
/// `/q_restaurantes/`), and doubles as its identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub url: String,
    pub name: String,
}

impl Category {
    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
        }
    }

    /// Canonical short name taken from the `q_<name>/` segment of the URL
    ///
    /// Returns `None` when the URL carries no such segment.
    pub fn short_name(&self) -> Option<&str> {
        let (_, rest) = self.url.split_once("q_")?;
        rest.split('/').next().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_from_query_segment() {
        let category = Category::new("/q_abogados/", "Abogados");
        assert_eq!(category.short_name(), Some("abogados"));
    }

    #[test]
    fn test_short_name_with_trailing_path() {
        let category = Category::new("/buscar/q_ferreterias/l_montevideo", "Ferreterías");
        assert_eq!(category.short_name(), Some("ferreterias"));
    }

    #[test]
    fn test_short_name_without_segment() {
        let category = Category::new("/categorias/abogados", "Abogados");
        assert_eq!(category.short_name(), None);
    }

    #[test]
    fn test_json_field_names() {
        let category = Category::new("/q_bares/", "Bares");
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, r#"{"url":"/q_bares/","name":"Bares"}"#);
    }
}
