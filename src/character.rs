//! Module containing things related to a character.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    meta::Link,
    normalize::{Schema, Shape},
    summary::{ComicSummary, EventSummary, SeriesSummary, StorySummary},
};

/// Represents a character on the Marvel API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Derived from the last segment of `resource_uri`.
    #[serde(deserialize_with = "crate::stdx::serde::i64_from_string")]
    pub id: i64,
    #[allow(missing_docs)]
    pub name: String,
    #[allow(missing_docs)]
    #[serde(default)]
    pub description: Option<String>,
    #[allow(missing_docs)]
    #[serde(default, deserialize_with = "crate::stdx::serde::datetime_optional")]
    pub modified: Option<DateTime<FixedOffset>>,
    /// Canonical API URL of this character.
    #[serde(rename = "resourceURI")]
    pub resource_uri: String,
    #[allow(missing_docs)]
    #[serde(default)]
    pub urls: Vec<Link>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Comics the character appears in.
    #[serde(default)]
    pub comics: Vec<ComicSummary>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub stories: Vec<StorySummary>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub events: Vec<EventSummary>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub series: Vec<SeriesSummary>,
    /// Fields not covered above, kept as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Schema for Character {
    const SHAPE: Shape = Shape {
        kind: "character",
        collections: &["comics", "stories", "events", "series"],
        references: &[],
        images: &[],
        keeps_response: false,
    };
}
