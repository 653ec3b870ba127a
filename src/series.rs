//! A comic series: a run of numbered issues, like `Deadpool (2012 - 2015)`.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    meta::Link,
    normalize::{Schema, Shape},
    summary::{
        CharacterSummary, ComicSummary, CreatorSummary, EventSummary, SeriesSummary, StorySummary,
    },
};

/// Represents a series on the Marvel API.
///
/// This type is not constructed directly, instead it is gotten through a [`Client`](crate::Client)
/// via [`Client::series()`](crate::Client::series) or [`Client::series_list()`](crate::Client::series_list).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    /// Derived from the last segment of `resource_uri`.
    #[serde(deserialize_with = "crate::stdx::serde::i64_from_string")]
    pub id: i64,
    #[allow(missing_docs)]
    pub title: String,
    #[allow(missing_docs)]
    #[serde(default)]
    pub description: Option<String>,
    /// Canonical API URL of this series.
    #[serde(rename = "resourceURI")]
    pub resource_uri: String,
    /// Public web pages for this series.
    #[serde(default)]
    pub urls: Vec<Link>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub start_year: Option<i32>,
    /// `2099` for series that are still running.
    #[serde(default)]
    pub end_year: Option<i32>,
    /// Age rating, e.g. `Rated T+`; often empty.
    #[serde(default)]
    pub rating: Option<String>,
    /// `collection`, `one shot`, `limited`, `ongoing`, ...
    #[serde(default)]
    pub r#type: Option<String>,
    #[allow(missing_docs)]
    #[serde(default, deserialize_with = "crate::stdx::serde::datetime_optional")]
    pub modified: Option<DateTime<FixedOffset>>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Issues in this series.
    #[serde(default)]
    pub comics: Vec<ComicSummary>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub stories: Vec<StorySummary>,
    /// Events that issues of this series tie into.
    #[serde(default)]
    pub events: Vec<EventSummary>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub characters: Vec<CharacterSummary>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub creators: Vec<CreatorSummary>,
    /// The series that follows this one, if any.
    #[serde(default)]
    pub next: Option<SeriesSummary>,
    /// The series that precedes this one, if any.
    #[serde(default)]
    pub previous: Option<SeriesSummary>,
    /// Fields not covered above, kept as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Schema for Series {
    const SHAPE: Shape = Shape {
        kind: "series",
        collections: &["comics", "stories", "events", "characters", "creators"],
        references: &["next", "previous"],
        images: &[],
        keeps_response: false,
    };
}
