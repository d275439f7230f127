//! Serde helpers for tolerant response parsing.

use serde::{Deserialize, Deserializer};

/// Deserialize a sequence, treating `null` the same as a missing field.
pub fn null_as_empty_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
