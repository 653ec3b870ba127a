//! Minimal references to an entity, as embedded inside another one.
//!
//! A [`Series`](crate::Series) lists the comics in it, an [`Event`](crate::Event) the characters
//! taking part, and so on. Those nested entities come back as summaries: enough to identify and
//! name them, and a `resource_uri` to fetch the full entity with.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::normalize::{Schema, Shape};

macro_rules! summary {
    ($(#[$attr:meta])* $name:ident, $kind:literal { $($(#[$field_attr:meta])* $field:ident: $ty:ty,)* }) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            /// Derived from the last segment of `resource_uri`.
            #[serde(deserialize_with = "crate::stdx::serde::i64_from_string")]
            pub id: i64,
            #[allow(missing_docs)]
            #[serde(default)]
            pub name: String,
            /// Canonical API URL of the full entity.
            #[serde(rename = "resourceURI")]
            pub resource_uri: String,
            $(
                $(#[$field_attr])*
                pub $field: $ty,
            )*
            /// Fields not covered above, kept as-is.
            #[serde(flatten)]
            pub extra: Map<String, Value>,
        }

        impl Schema for $name {
            const SHAPE: Shape = Shape {
                kind: $kind,
                ..Shape::SUMMARY
            };
        }
    };
}

summary!(
    /// A reference to a [`Series`](crate::Series).
    SeriesSummary, "series summary" {}
);

summary!(
    /// A reference to a [`Comic`](crate::Comic).
    ComicSummary, "comic summary" {}
);

summary!(
    /// A reference to an [`Event`](crate::Event).
    EventSummary, "event summary" {}
);

summary!(
    /// A reference to a [`Character`](crate::Character).
    CharacterSummary, "character summary" {
        /// The part a character plays in a story, when known.
        #[serde(default)]
        role: Option<String>,
    }
);

summary!(
    /// A reference to a [`Creator`](crate::Creator), with the role they had.
    CreatorSummary, "creator summary" {
        /// e.g. `writer`, `penciller (cover)`, `colorist (cover)`.
        #[serde(default)]
        role: Option<String>,
    }
);

summary!(
    /// A reference to a [`Story`](crate::Story).
    StorySummary, "story summary" {
        /// e.g. `cover`, `interiorStory`.
        #[serde(default)]
        r#type: Option<String>,
    }
);
