use super::{attr_of, select_all, select_first, text_of};
use crate::model::Address;
use scraper::Html;

/// Extracts the postal address of a publication
///
/// The city is the last comma-separated segment of the `address` block;
/// street, locality and zip come from the `meta[itemprop]` tags inside it.
/// The address type and door number are never present on the page and stay
/// at their defaults.
pub fn extract_address(document: &Html) -> Address {
    let mut address = Address::default();

    let Some(block) = select_first(document.root_element(), "address") else {
        return address;
    };

    let text = text_of(block);
    if let Some(city) = text.rsplit(',').next() {
        address.city = city.trim().to_string();
    }

    for meta in select_all(block, "meta[itemprop]") {
        let Some(value) = attr_of(meta, "content") else {
            continue;
        };
        match attr_of(meta, "itemprop") {
            Some("streetAddress") => address.street = value.to_string(),
            Some("addressLocality") => address.locality = value.to_string(),
            Some("zip") => address.zip = value.to_string(),
            _ => {}
        }
    }

    address
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::parse_document;
    use crate::model::AddressType;

    #[test]
    fn test_extract_full_address() {
        let html = r#"
            <address>
              <meta itemprop="streetAddress" content="Av. 18 de Julio 1234">
              <meta itemprop="addressLocality" content="Centro">
              <meta itemprop="zip" content="11100">
              Av. 18 de Julio 1234, Centro,
                Montevideo
            </address>
        "#;
        let address = extract_address(&parse_document(html));

        assert_eq!(address.street, "Av. 18 de Julio 1234");
        assert_eq!(address.locality, "Centro");
        assert_eq!(address.zip, "11100");
        assert_eq!(address.city, "Montevideo");
        assert_eq!(address.address_type, AddressType::Unspecified);
        assert_eq!(address.number, "");
    }

    #[test]
    fn test_address_without_commas_is_all_city() {
        let html = "<address> Maldonado </address>";
        let address = extract_address(&parse_document(html));
        assert_eq!(address.city, "Maldonado");
        assert_eq!(address.street, "");
    }

    #[test]
    fn test_unknown_meta_ignored() {
        let html = r#"<address><meta itemprop="postalCode" content="999">Salto</address>"#;
        let address = extract_address(&parse_document(html));
        assert_eq!(address.zip, "");
        assert_eq!(address.city, "Salto");
    }

    #[test]
    fn test_missing_address_block() {
        let address = extract_address(&parse_document("<p>Sin dirección</p>"));
        assert_eq!(address, Address::default());
    }
}
