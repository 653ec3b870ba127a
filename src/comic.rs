//! Module containing things related to a single comic issue, trade paperback or hardcover.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    meta::{ComicDate, Link, Price, TextObject},
    normalize::{Schema, Shape},
    summary::{
        CharacterSummary, ComicSummary, CreatorSummary, EventSummary, SeriesSummary, StorySummary,
    },
};

/// Represents a comic on the Marvel API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comic {
    /// Derived from the last segment of `resource_uri`.
    #[serde(deserialize_with = "crate::stdx::serde::i64_from_string")]
    pub id: i64,
    /// ID of the digital edition, `0` when there is none.
    #[serde(default)]
    pub digital_id: Option<i64>,
    #[allow(missing_docs)]
    pub title: String,
    /// Fractional for some specials, e.g. `0.1`.
    #[serde(default)]
    pub issue_number: Option<f64>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub variant_description: Option<String>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub description: Option<String>,
    #[allow(missing_docs)]
    #[serde(default, deserialize_with = "crate::stdx::serde::datetime_optional")]
    pub modified: Option<DateTime<FixedOffset>>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub isbn: Option<String>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub upc: Option<String>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub diamond_code: Option<String>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub ean: Option<String>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub issn: Option<String>,
    /// `Comic`, `Trade Paperback`, `Hardcover`, `Digest`, ...
    #[serde(default)]
    pub format: Option<String>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub page_count: Option<u32>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub text_objects: Vec<TextObject>,
    /// Canonical API URL of this comic.
    #[serde(rename = "resourceURI")]
    pub resource_uri: String,
    #[allow(missing_docs)]
    #[serde(default)]
    pub urls: Vec<Link>,
    /// The series this comic is part of.
    #[serde(default)]
    pub series: Option<SeriesSummary>,
    /// Variant covers of this issue.
    #[serde(default)]
    pub variants: Vec<ComicSummary>,
    /// Collected editions this issue was reprinted in.
    #[serde(default)]
    pub collections: Vec<ComicSummary>,
    /// For a collected edition, the issues it reprints.
    #[serde(default)]
    pub collected_issues: Vec<ComicSummary>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub dates: Vec<ComicDate>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub prices: Vec<Price>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Promotional images, cover art first.
    #[serde(default)]
    pub images: Vec<String>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub creators: Vec<CreatorSummary>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub characters: Vec<CharacterSummary>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub stories: Vec<StorySummary>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub events: Vec<EventSummary>,
    /// Fields not covered above, kept as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Comic {
    /// Returns the date of the given `type`, e.g. `onsaleDate`.
    #[must_use]
    pub fn date(&self, r#type: &str) -> Option<DateTime<FixedOffset>> {
        self.dates
            .iter()
            .find(|date| date.r#type == r#type)
            .and_then(|date| date.date)
    }

    /// Returns the price of the given `type`, e.g. `printPrice`.
    #[must_use]
    pub fn price(&self, r#type: &str) -> Option<f64> {
        self.prices
            .iter()
            .find(|price| price.r#type == r#type)
            .map(|price| price.price)
    }
}

impl Schema for Comic {
    const SHAPE: Shape = Shape {
        kind: "comic",
        // Unlike everywhere else, a comic's `series` is a single summary rather than a collection.
        collections: &["creators", "characters", "stories", "events"],
        references: &["series", "variants", "collections", "collectedIssues"],
        images: &["images"],
        keeps_response: false,
    };
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::normalize::Payload;
    use chrono::Datelike;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn should_load_comic() {
        let comic = Comic::load(Payload::Entity(json!({
            "id": 61639,
            "digitalId": 43344,
            "title": "Deadpool (2012) #32",
            "issueNumber": 32,
            "variantDescription": "",
            "description": null,
            "modified": "2017-04-18T09:45:41-0400",
            "isbn": "",
            "upc": "75960608158803211",
            "diamondCode": "JUN140718",
            "ean": "",
            "issn": "",
            "format": "Comic",
            "pageCount": 32,
            "textObjects": [{ "type": "issue_solicit_text", "language": "en-us", "text": "THE WEDDING OF DEADPOOL!" }],
            "resourceURI": "http://gateway.marvel.com/v1/public/comics/61639",
            "urls": [{ "type": "detail", "url": "http://marvel.com/comics/issue/61639/deadpool_2012_32" }],
            "series": { "resourceURI": "http://gateway.marvel.com/v1/public/series/17285", "name": "Deadpool (2012 - 2015)" },
            "variants": [{ "resourceURI": "http://gateway.marvel.com/v1/public/comics/61640", "name": "Deadpool (2012) #32 (Variant)" }],
            "collections": [],
            "collectedIssues": [],
            "dates": [
                { "type": "onsaleDate", "date": "2014-08-06T00:00:00-0400" },
                { "type": "focDate", "date": "-0001-11-30T00:00:00-0500" }
            ],
            "prices": [{ "type": "printPrice", "price": 3.99 }],
            "thumbnail": { "path": "http://i.annihil.us/u/prod/marvel/i/mg/9/30/53cd2c7612d4c", "extension": "jpg" },
            "images": [{ "path": "http://i.annihil.us/u/prod/marvel/i/mg/9/30/53cd2c7612d4c", "extension": "jpg" }],
            "creators": {
                "available": 1,
                "items": [{ "resourceURI": "http://gateway.marvel.com/v1/public/creators/11482", "name": "Jesus Aburtov", "role": "colorist (cover)" }],
                "returned": 1
            },
            "characters": {
                "available": 1,
                "items": [{ "resourceURI": "http://gateway.marvel.com/v1/public/characters/1009268", "name": "Deadpool" }],
                "returned": 1
            },
            "stories": {
                "available": 1,
                "items": [{ "resourceURI": "http://gateway.marvel.com/v1/public/stories/109335", "name": "cover from Deadpool (2012) #32", "type": "cover" }],
                "returned": 1
            },
            "events": { "available": 0, "items": [], "returned": 0 }
        })))
        .unwrap();

        assert_eq!(61639, comic.id);
        assert_eq!(Some(32.0), comic.issue_number);
        assert_eq!(Some(17285), comic.series.as_ref().map(|series| series.id));
        assert_eq!(61640, comic.variants[0].id);
        assert_eq!(Some(2014), comic.date("onsaleDate").map(|date| date.year()));
        assert_eq!(None, comic.date("focDate"));
        assert_eq!(Some(3.99), comic.price("printPrice"));
        assert_eq!(None, comic.price("digitalPurchasePrice"));
        assert_eq!(
            "http://i.annihil.us/u/prod/marvel/i/mg/9/30/53cd2c7612d4c.jpg",
            comic.images[0]
        );
        assert_eq!(1009268, comic.characters[0].id);
        assert_eq!(None, comic.characters[0].role);
        assert_eq!(Some("colorist (cover)"), comic.creators[0].role.as_deref());
        assert_eq!("THE WEDDING OF DEADPOOL!", comic.text_objects[0].text);
    }

    #[test]
    fn should_join_thumbnail_and_image_paths() {
        let comic = Comic::load(Payload::Entity(json!({
            "resourceURI": "http://gateway.marvel.com/v1/public/comics/61639",
            "title": "Deadpool (2012) #32",
            "thumbnail": { "path": "http://x", "extension": "jpg" },
            "images": [
                { "path": "http://x", "extension": "jpg" },
                { "path": "http://y", "extension": "png" }
            ]
        })))
        .unwrap();

        assert_eq!(Some("http://x.jpg"), comic.thumbnail.as_deref());
        assert_eq!(vec!["http://x.jpg", "http://y.png"], comic.images);
    }
}
