//! Field decoders for records written by other clients.
//!
//! The backend stores whatever the form sent, so a field may come back as
//! `null`, as a number where text is expected, or the other way round. These
//! decoders fall back to an empty value instead of rejecting the record.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(f64),
    Flag(bool),
    Unsupported(IgnoredAny),
}

pub(crate) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Text(text)) => text,
        Some(Scalar::Number(number)) => number.to_string(),
        Some(Scalar::Flag(flag)) => flag.to_string(),
        Some(Scalar::Unsupported(_)) | None => String::new(),
    })
}

pub(crate) fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    string(deserializer).map(|text| Some(text).filter(|text| !text.is_empty()))
}

/// Status and type codes: anything that is not text becomes an empty code
pub(crate) fn code<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    string(deserializer).map(T::from)
}

pub(crate) fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Number(number)) => number,
        Some(Scalar::Text(text)) => text.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}
