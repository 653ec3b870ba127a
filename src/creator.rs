//! Module containing things related to a creator: a writer, artist, colorist, editor, ...

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    meta::{Link, Response},
    normalize::{Schema, Shape},
    summary::{ComicSummary, EventSummary, SeriesSummary, StorySummary},
};

/// Represents a creator on the Marvel API.
///
/// Unlike the other entity kinds, a creator fetched on its own keeps the full API
/// [`Response`] it was built from in [`Creator::response`], e.g. for its `etag` or attribution text.
///
/// # Example
///
/// ```
/// # use marvel_data::{Creator, Payload, Schema, errors::ApiError};
/// # use serde_json::json;
/// let creator = Creator::load(Payload::Entity(json!({
///     "resourceURI": "http://gateway.marvel.com/v1/public/creators/11482",
///     "firstName": "Jesus",
///     "lastName": "Aburtov",
///     "fullName": "Jesus Aburtov",
/// })))?;
///
/// assert_eq!(11482, creator.id);
/// assert_eq!(Some("Jesus Aburtov"), creator.full_name.as_deref());
/// assert!(creator.response.is_none());
/// # Ok::<(), ApiError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    /// Derived from the last segment of `resource_uri`.
    #[serde(deserialize_with = "crate::stdx::serde::i64_from_string")]
    pub id: i64,
    #[allow(missing_docs)]
    #[serde(default)]
    pub first_name: Option<String>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub middle_name: Option<String>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub last_name: Option<String>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub suffix: Option<String>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub full_name: Option<String>,
    #[allow(missing_docs)]
    #[serde(default, deserialize_with = "crate::stdx::serde::datetime_optional")]
    pub modified: Option<DateTime<FixedOffset>>,
    /// Canonical API URL of this creator.
    #[serde(rename = "resourceURI")]
    pub resource_uri: String,
    #[allow(missing_docs)]
    #[serde(default)]
    pub urls: Vec<Link>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Series this creator has worked on.
    #[serde(default)]
    pub series: Vec<SeriesSummary>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub stories: Vec<StorySummary>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub comics: Vec<ComicSummary>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub events: Vec<EventSummary>,
    /// The full response this creator was taken from; `None` when built from a bare entity.
    #[serde(default)]
    pub response: Option<Response>,
    /// Fields not covered above, kept as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Schema for Creator {
    const SHAPE: Shape = Shape {
        kind: "creator",
        collections: &["series", "stories", "comics", "events"],
        references: &[],
        images: &[],
        keeps_response: true,
    };
}
