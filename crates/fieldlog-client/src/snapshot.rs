//! Wire-format types for the channel feed API.
//!
//! The endpoint returns a document shaped
//! `{ channel: { id, name, ... }, feeds: [ { created_at, entry_id, field1 }, ... ] }`.
//! These types mirror that shape; the data is trusted once parsed.

use serde::{Deserialize, Deserializer, Serialize};

/// One snapshot of a channel as returned by the feed endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelSnapshot {
    /// Channel metadata, including the device identity.
    pub channel: ChannelInfo,
    /// Feed records, newest first. Absent in the document means empty.
    #[serde(default)]
    pub feeds: Vec<Feed>,
}

/// Channel metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelInfo {
    /// Numeric channel identifier.
    pub id: u64,
    /// Device display name.
    pub name: String,
    /// Label of the measurement field (e.g. "Temperature"), if published.
    #[serde(default, rename = "field1")]
    pub field_label: Option<String>,
}

/// One reading record from the feed array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feed {
    /// Capture time in the feed API format, `YYYY-MM-DDTHH:MM:SSZ`.
    pub created_at: String,
    /// Entry identifier. The wire value may be a JSON number or string;
    /// either way it is carried as a string.
    #[serde(deserialize_with = "entry_id_string")]
    pub entry_id: String,
    /// Measurement value. `null` and a missing key both map to `None`.
    #[serde(default, rename = "field1")]
    pub value: Option<String>,
}

/// Accept an entry id as either a JSON integer or a string.
fn entry_id_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum EntryId {
        Number(u64),
        Text(String),
    }

    Ok(match EntryId::deserialize(deserializer)? {
        EntryId::Number(n) => n.to_string(),
        EntryId::Text(s) => s,
    })
}
