//! Form definitions backing the university routes.

use serde::{Deserialize, Deserializer};

pub mod course;
pub mod department;
pub mod instructor;
pub mod student;

/// Deserializes an optional field treating an empty or whitespace-only
/// string as absent. HTML selects and text inputs submit empty strings
/// for values the user left blank.
pub(crate) fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}
