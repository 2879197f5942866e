//! Wire types for the `/api/simplify` exchange.

use serde::{Deserialize, Deserializer, Serialize};

/// Request body sent to the simplification endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifyRequest {
    pub text: String,
    /// Percentage of the text to remove, 0–100.
    pub compress_ratio: u8,
    /// Similarity score in 0.0–1.0 above which two passages count as duplicates.
    pub dup_threshold: f64,
    pub dedupe: bool,
    pub preserve_order: bool,
    pub clean_fillers: bool,
}

/// Response body returned by the simplification endpoint.
///
/// Every field is optional on the wire; absent or `null` values fall back
/// to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifyResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub orig_len: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub new_len: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub removed: Vec<String>,
}

impl SimplifyResponse {
    pub fn new(text: impl Into<String>, orig_len: u64, new_len: u64, removed: Vec<String>) -> Self {
        Self { text: text.into(), orig_len, new_len, removed }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
