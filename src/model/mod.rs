//! Records produced by the crawl
//!
//! Everything here round-trips through the JSON cache files, so the serde
//! field names are part of the on-disk format.

mod category;
mod publication;

pub use category::Category;
pub use publication::{
    Address, AddressType, Coordinates, DayOfWeek, HourRange, Phone, PhoneType, Publication,
    Timetable,
};

use serde::{Deserialize, Deserializer};

/// Deserializes `null` as the type's default value
///
/// Older cache files encode empty lists as `null`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
