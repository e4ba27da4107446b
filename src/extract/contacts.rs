use super::{select_all, text_of};
use crate::model::{Phone, PhoneType};
use crate::normalize::clean_field;
use scraper::Html;

/// Phones, e-mail addresses and web links of a publication
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contacts {
    pub phones: Vec<Phone>,
    pub emails: Vec<String>,
    pub webs: Vec<String>,
}

/// Extracts the contact rows of a publication page
///
/// # Extraction Rules
///
/// 1. Read the sentinel numbers: the main phone (`.fl.icon-phone.mr10 span`)
///    and the WhatsApp number (`.fl.icon-whatsup span`), both cleaned
/// 2. Walk the rows of the contact list (`.info.mb10 .dt.w100`), dispatching
///    on the row label (`.title.dtc.w30`):
///
/// | Label | Action |
/// |-------|--------|
/// | `Tel.` | Each `.dtc.w70` value becomes an office phone |
/// | `Cel.` | Each `.dtc.w70` value becomes a mobile phone |
/// | `Fax` | Each `.dtc.w70` value becomes a fax |
/// | `Web` | Each anchor text is collected as a web link |
/// | `Email` | Each anchor text is collected as an e-mail |
///
/// Phones are flagged as main or WhatsApp when their cleaned number equals
/// the corresponding sentinel. Rows with any other label are ignored.
pub fn extract_contacts(document: &Html) -> Contacts {
    let root = document.root_element();

    let main_phone = last_cleaned_text(document, ".fl.icon-phone.mr10 span");
    let whatsapp_number = last_cleaned_text(document, ".fl.icon-whatsup span");

    let mut contacts = Contacts::default();

    for row in select_all(root, ".info.mb10 .dt.w100") {
        for label in select_all(row, ".title.dtc.w30") {
            let label = text_of(label);
            let phone_type = match label.trim() {
                "Tel." => PhoneType::Office,
                "Cel." => PhoneType::Mobile,
                "Fax" => PhoneType::Fax,
                "Web" => {
                    contacts.webs.extend(anchor_texts(row));
                    continue;
                }
                "Email" => {
                    contacts.emails.extend(anchor_texts(row));
                    continue;
                }
                other => {
                    tracing::trace!("Ignoring contact row '{}'", other);
                    continue;
                }
            };

            for value in select_all(row, ".dtc.w70") {
                let number = clean_field(&text_of(value));
                if number.is_empty() {
                    continue;
                }
                contacts.phones.push(Phone {
                    phone_type,
                    is_main: main_phone.as_deref() == Some(number.as_str()),
                    has_whatsapp: whatsapp_number.as_deref() == Some(number.as_str()),
                    number,
                });
            }
        }
    }

    contacts
}

/// Cleaned text of the last element matching `css`, if any
fn last_cleaned_text(document: &Html, css: &str) -> Option<String> {
    select_all(document.root_element(), css)
        .into_iter()
        .last()
        .map(|span| clean_field(&text_of(span)))
        .filter(|number| !number.is_empty())
}

fn anchor_texts(row: scraper::ElementRef<'_>) -> Vec<String> {
    select_all(row, "a")
        .into_iter()
        .map(|a| text_of(a).trim().to_string())
        .collect()
}
