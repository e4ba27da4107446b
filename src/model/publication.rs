//! Business listing records and their parts

use super::null_as_default;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Kind of a listed phone number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneType {
    Office,
    Mobile,
    Fax,
}

/// A phone number listed on a publication page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    #[serde(rename = "phoneType")]
    pub phone_type: PhoneType,

    pub number: String,

    /// Matches the main number shown at the top of the page
    #[serde(rename = "isMain", default)]
    pub is_main: bool,

    /// Matches the WhatsApp number shown at the top of the page
    #[serde(rename = "haveWhatsapp", default)]
    pub has_whatsapp: bool,
}

/// Day a range of opening hours applies to
///
/// Ordering follows the week, with `Unknown` last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
    Unknown,
}

impl DayOfWeek {
    /// Maps a Spanish day label as printed by the directory
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "lunes" => Self::Monday,
            "martes" => Self::Tuesday,
            "miércoles" | "miercoles" => Self::Wednesday,
            "jueves" => Self::Thursday,
            "viernes" => Self::Friday,
            "sábado" | "sabado" => Self::Saturday,
            "domingo" => Self::Sunday,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opening and closing time as printed on the page (e.g. `09:00`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRange {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

/// Opening hours per day; a day may hold several ranges (split shifts)
pub type Timetable = BTreeMap<DayOfWeek, Vec<HourRange>>;

/// Geographic position of a listing; zero when the page has none
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

impl fmt::Display for Coordinates {
    /// Renders `[lat, lat]`: the longitude slot repeats the latitude, as the
    /// published reports always have.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.6}, {:.6}]", self.latitude, self.latitude)
    }
}

/// Kind of premises; extraction never fills it in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressType {
    #[default]
    #[serde(rename = "")]
    Unspecified,
    #[serde(rename = "office")]
    Office,
    #[serde(rename = "house")]
    House,
    #[serde(rename = "apartment")]
    Apartment,
}

impl AddressType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "",
            Self::Office => "office",
            Self::House => "house",
            Self::Apartment => "apartment",
        }
    }
}

/// Postal address of a listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(rename = "addressType")]
    pub address_type: AddressType,

    pub number: String,

    #[serde(rename = "streetAddress")]
    pub street: String,

    pub locality: String,

    pub zip: String,

    pub city: String,
}

/// One business listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    #[serde(default)]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub phones: Vec<Phone>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub mails: Vec<String>,

    #[serde(default)]
    pub address: Address,

    #[serde(default)]
    pub coordinates: Coordinates,

    #[serde(default, deserialize_with = "null_as_default")]
    pub webs: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub timetable: Timetable,

    /// Absolute URL the record was fetched from
    #[serde(rename = "publicationUrl", default)]
    pub url: String,

    #[serde(default)]
    pub information: String,
}
