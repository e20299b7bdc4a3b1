//! Permissive decoding for optional filter input.
//!
//! Filter payloads arrive either as query strings, where every value is text,
//! or as JSON bodies, where numbers may be real numbers. A value that does not
//! parse is treated as absent instead of failing the whole request.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawList {
    One(String),
    Many(Vec<RawScalar>),
    Other(IgnoredAny),
}

impl RawScalar {
    fn into_text(self) -> String {
        match self {
            RawScalar::Text(text) => text,
            RawScalar::Number(number) => number.to_string(),
            RawScalar::Flag(flag) => flag.to_string(),
            RawScalar::Other(_) => String::new(),
        }
    }
}

/// Parse trimmed input, mapping blank or unparsable text to `None`.
pub fn parse_optional<T: FromStr>(raw: &str) -> Option<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Parse a whole non-negative number. `"5.0"` is accepted, `"5.5"` is not.
pub fn parse_whole(raw: &str) -> Option<u32> {
    parse_optional::<u32>(raw).or_else(|| {
        parse_optional::<f64>(raw)
            .filter(|value| value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(value))
            .map(|value| value as u32)
    })
}

/// Split a comma separated list, dropping blank entries.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a price-like amount: finite and not negative, otherwise `None`.
pub fn parse_amount(raw: &str) -> Option<f64> {
    parse_optional::<f64>(raw).filter(|value| value.is_finite() && *value >= 0.0)
}

/// `deserialize_with` for any optional `FromStr` field.
pub fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<RawScalar>::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| parse_optional(&raw.into_text())))
}

/// `deserialize_with` for optional monetary amounts.
pub fn amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawScalar>::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| parse_amount(&raw.into_text())))
}

/// `deserialize_with` for whole counts such as ages.
pub fn whole<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawScalar>::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| parse_whole(&raw.into_text())))
}

/// `deserialize_with` for string lists. A single string is split on commas,
/// an array keeps its scalar items, anything else is empty.
pub fn list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawList>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawList::One(text)) => parse_list(&text),
        Some(RawList::Many(items)) => items
            .into_iter()
            .map(RawScalar::into_text)
            .filter(|item| !item.trim().is_empty())
            .collect(),
        Some(RawList::Other(_)) | None => Vec::new(),
    })
}

/// `deserialize_with` for fields that fall back to their default.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
{
    Ok(optional(deserializer)?.unwrap_or_default())
}

/// `deserialize_with` for free text; `null` becomes an empty string.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawScalar>::deserialize(deserializer)?;
    Ok(raw.map(RawScalar::into_text).unwrap_or_default())
}
