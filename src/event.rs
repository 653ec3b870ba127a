//! A crossover event, like `Secret Empire` or `Civil War II`.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    meta::Link,
    normalize::{Schema, Shape},
    summary::{
        CharacterSummary, ComicSummary, CreatorSummary, EventSummary, SeriesSummary, StorySummary,
    },
};

/// Represents an event on the Marvel API.
///
/// Events are chained: [`Event::next`] and [`Event::previous`] point at the neighbouring
/// events in publication order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Derived from the last segment of `resource_uri`.
    #[serde(deserialize_with = "crate::stdx::serde::i64_from_string")]
    pub id: i64,
    #[allow(missing_docs)]
    pub title: String,
    #[allow(missing_docs)]
    #[serde(default)]
    pub description: Option<String>,
    /// Canonical API URL of this event.
    #[serde(rename = "resourceURI")]
    pub resource_uri: String,
    #[allow(missing_docs)]
    #[serde(default)]
    pub urls: Vec<Link>,
    #[allow(missing_docs)]
    #[serde(default, deserialize_with = "crate::stdx::serde::datetime_optional")]
    pub modified: Option<DateTime<FixedOffset>>,
    /// When the event started publishing.
    #[serde(default, deserialize_with = "crate::stdx::serde::date_optional")]
    pub start: Option<NaiveDate>,
    /// When the event finished publishing.
    #[serde(default, deserialize_with = "crate::stdx::serde::date_optional")]
    pub end: Option<NaiveDate>,
    /// The thumbnail image, as `{path}.{extension}`.
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub comics: Vec<ComicSummary>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub stories: Vec<StorySummary>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub series: Vec<SeriesSummary>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub characters: Vec<CharacterSummary>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub creators: Vec<CreatorSummary>,
    /// The event that came after this one.
    #[serde(default)]
    pub next: Option<EventSummary>,
    /// The event that came before this one.
    #[serde(default)]
    pub previous: Option<EventSummary>,
    /// Fields not covered above, kept as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Schema for Event {
    const SHAPE: Shape = Shape {
        kind: "event",
        collections: &["comics", "stories", "series", "characters", "creators"],
        references: &["next", "previous"],
        images: &[],
        keeps_response: false,
    };
}
