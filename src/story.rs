//! Module containing things related to a story: the cover, or one of the interior stories, of a comic.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    normalize::{Schema, Shape},
    summary::{CharacterSummary, ComicSummary, CreatorSummary, EventSummary, SeriesSummary},
};

/// Represents a story on the Marvel API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    /// Derived from the last segment of `resource_uri`.
    #[serde(deserialize_with = "crate::stdx::serde::i64_from_string")]
    pub id: i64,
    #[allow(missing_docs)]
    pub title: String,
    #[allow(missing_docs)]
    #[serde(default)]
    pub description: Option<String>,
    /// Canonical API URL of this story.
    #[serde(rename = "resourceURI")]
    pub resource_uri: String,
    /// `cover`, `interiorStory`, ...
    #[serde(default)]
    pub r#type: Option<String>,
    #[allow(missing_docs)]
    #[serde(default, deserialize_with = "crate::stdx::serde::datetime_optional")]
    pub modified: Option<DateTime<FixedOffset>>,
    /// Stories rarely have one.
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub comics: Vec<ComicSummary>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub series: Vec<SeriesSummary>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub events: Vec<EventSummary>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub characters: Vec<CharacterSummary>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub creators: Vec<CreatorSummary>,
    /// The comic this story was first published in.
    #[serde(default)]
    pub original_issue: Option<ComicSummary>,
    /// Fields not covered above, kept as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Schema for Story {
    const SHAPE: Shape = Shape {
        kind: "story",
        collections: &["comics", "series", "events", "characters", "creators"],
        references: &["originalIssue"],
        images: &[],
        keeps_response: false,
    };
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::normalize::Payload;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn should_join_thumbnail_path_and_extension() {
        let story = Story::load(Payload::Entity(json!({
            "resourceURI": "http://gateway.marvel.com/v1/public/stories/109335",
            "title": "cover from Deadpool (2012) #32",
            "thumbnail": { "path": "http://x", "extension": "jpg" },
            "originalIssue": {
                "resourceURI": "http://gateway.marvel.com/v1/public/comics/61639",
                "name": "Deadpool (2012) #32"
            }
        })))
        .unwrap();

        assert_eq!(Some("http://x.jpg"), story.thumbnail.as_deref());
        assert_eq!(Some(61639), story.original_issue.map(|issue| issue.id));
    }
}
