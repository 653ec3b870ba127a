//! Value types shared between entity kinds, and the top-level response envelope.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// A public web link for an entity, e.g. its `detail` or `wiki` page on marvel.com.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    /// What kind of page this is: `detail`, `wiki`, `comiclink`, `purchase`, ...
    pub r#type: String,
    #[allow(missing_docs)]
    pub url: String,
}

/// A descriptive text blurb attached to a comic.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TextObject {
    /// `issue_solicit_text`, `issue_preview_text`, ...
    pub r#type: String,
    /// IETF language tag, e.g. `en-us`.
    pub language: String,
    #[allow(missing_docs)]
    pub text: String,
}

/// A key date for a comic, like when it went on sale.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ComicDate {
    /// `onsaleDate`, `focDate`, `unlimitedDate`, `digitalPurchaseDate`, ...
    pub r#type: String,
    /// `None` when the API has no date on record.
    #[serde(default, deserialize_with = "crate::stdx::serde::datetime_optional")]
    pub date: Option<DateTime<FixedOffset>>,
}

/// A price point for a comic.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Price {
    /// `printPrice` or `digitalPurchasePrice`.
    pub r#type: String,
    /// Price in USD.
    pub price: f64,
}

/// The top-level wrapper around every Marvel API response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// HTTP-like status code of the call; `200` for success.
    pub code: u16,
    /// Human readable status text.
    pub status: String,
    #[serde(default)]
    #[allow(missing_docs)]
    pub copyright: Option<String>,
    #[serde(default)]
    #[allow(missing_docs)]
    pub attribution_text: Option<String>,
    #[serde(default, rename = "attributionHTML")]
    #[allow(missing_docs)]
    pub attribution_html: Option<String>,
    /// Digest of the response content, usable for conditional requests.
    #[serde(default)]
    pub etag: Option<String>,
    #[allow(missing_docs)]
    pub data: Container,
}

/// The page of results carried by a [`Response`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Container {
    /// The number of results skipped.
    #[serde(default)]
    pub offset: u32,
    /// The requested page size.
    #[serde(default)]
    pub limit: u32,
    /// The total number of results available for the query.
    #[serde(default)]
    pub total: u32,
    /// The number of results in this page.
    #[serde(default)]
    pub count: u32,
    /// The raw results, before normalization.
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
}
