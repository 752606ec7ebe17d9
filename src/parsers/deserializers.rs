use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::session::DEFAULT_SESSION_VERSION;

/// Custom deserializer for free-form string fields
///
/// Strings pass through; `null`, numbers, objects and arrays become an empty
/// string instead of failing the whole record.
pub fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

/// Custom deserializer for the header `version`: integers are kept, anything else means 1
pub fn deserialize_version<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_i64().unwrap_or(DEFAULT_SESSION_VERSION))
}

/// Custom deserializer for nested records that must be JSON objects
///
/// Arrays and scalars become `None` instead of being matched to fields by position.
pub fn deserialize_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => Ok(T::deserialize(value).ok()),
        _ => Ok(None),
    }
}
