//! A page of entities, as returned by the list endpoints.

use serde_json::Value;
use std::{ops::Index, slice::SliceIndex};

use crate::{
    Character, Comic, Creator, Event, Series, Story,
    errors::ApiError,
    meta::Response,
    normalize::{Payload, Schema, check_code},
};

/// A page of [`Series`].
pub type SeriesList = List<Series>;
/// A page of [`Creator`]s.
pub type CreatorList = List<Creator>;
/// A page of [`Event`]s.
pub type EventList = List<Event>;
/// A page of [`Character`]s.
pub type CharacterList = List<Character>;
/// A page of [`Comic`]s.
pub type ComicList = List<Comic>;
/// A page of [`Story`]s.
pub type StoryList = List<Story>;

/// Every entity of one API response, fully built.
///
/// All of `data.results` is materialized up front: if a single element fails to load, the
/// whole list fails. Only the page the API returned is held; there is no fetching of further
/// pages.
///
/// Indexing works like it does on a slice, so `list[0]` is the first entity and `list[1..3]`
/// is a plain `&[T]`.
///
/// # Example
///
/// ```
/// # use marvel_data::{EventList, errors::ApiError};
/// # use serde_json::json;
/// let events = EventList::load(json!({
///     "code": 200,
///     "status": "Ok",
///     "data": {
///         "offset": 0, "limit": 20, "total": 74, "count": 2,
///         "results": [
///             { "resourceURI": "http://gateway.marvel.com/v1/public/events/296", "title": "Chaos War" },
///             { "resourceURI": "http://gateway.marvel.com/v1/public/events/302", "title": "Fear Itself" }
///         ]
///     }
/// }))?;
///
/// assert_eq!(2, events.len());
/// assert_eq!(74, events.total());
/// assert_eq!("Fear Itself", events[1].title);
///
/// let ids: Vec<i64> = events.iter().map(|event| event.id).collect();
/// assert_eq!(vec![296, 302], ids);
/// # Ok::<(), ApiError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct List<T> {
    items: Vec<T>,
    response: Response,
}

impl<T: Schema> List<T> {
    /// Builds a list from a full API response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the response has a non-200 `code`, isn't a well formed envelope,
    /// or if any of its results fails to load.
    pub fn load(response: Value) -> Result<Self, ApiError> {
        check_code(&response)?;

        let mut response: Response =
            serde_json::from_value(response).map_err(|source| ApiError::Validation {
                kind: "response",
                source,
            })?;

        let items = std::mem::take(&mut response.data.results)
            .into_iter()
            .map(|result| T::load(Payload::Entity(result)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { items, response })
    }
}

impl<T> List<T> {
    /// The number of entities in this page.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the page holds no entities.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the entity at `index`, or `None` if out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterates over the entities in API order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The entities as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the list, returning just the entities.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// The envelope the list was built from.
    ///
    /// Its `data.results` is always empty, as the results were moved into the list itself.
    #[inline]
    #[must_use]
    pub fn response(&self) -> &Response {
        &self.response
    }

    /// The number of results skipped before this page.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> u32 {
        self.response.data.offset
    }

    /// The page size that was asked for.
    #[inline]
    #[must_use]
    pub fn limit(&self) -> u32 {
        self.response.data.limit
    }

    /// The total number of results the query matches, across all pages.
    #[inline]
    #[must_use]
    pub fn total(&self) -> u32 {
        self.response.data.total
    }

    /// The number of results the API reported for this page.
    #[inline]
    #[must_use]
    pub fn count(&self) -> u32 {
        self.response.data.count
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for List<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.items[index]
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::summary::StorySummary;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn stories(results: Value) -> Value {
        json!({
            "code": 200,
            "status": "Ok",
            "etag": "0b1c8a0e5ed5b0f1ec2b1f8a8c3e4e6e0a2c7d0f",
            "data": { "offset": 20, "limit": 3, "total": 1000, "count": 3, "results": results }
        })
    }

    fn story(id: u32) -> Value {
        json!({
            "resourceURI": format!("http://gateway.marvel.com/v1/public/stories/{id}"),
            "name": format!("story {id}"),
            "type": "cover"
        })
    }

    #[test]
    fn should_index_like_iteration() {
        let list =
            List::<StorySummary>::load(stories(json!([story(7), story(8), story(9)]))).unwrap();

        assert_eq!(3, list.len());
        assert!(!list.is_empty());

        for (index, story) in list.iter().enumerate() {
            assert_eq!(story, &list[index]);
        }

        assert_eq!(Some(9), list.get(2).map(|story| story.id));
        assert_eq!(None, list.get(3));
    }

    #[test]
    fn should_slice_into_plain_slice() {
        let list =
            List::<StorySummary>::load(stories(json!([story(7), story(8), story(9)]))).unwrap();

        let ids: Vec<i64> = list[1..].iter().map(|story| story.id).collect();
        assert_eq!(vec![8, 9], ids);

        let ids: Vec<i64> = list[..=1].iter().map(|story| story.id).collect();
        assert_eq!(vec![7, 8], ids);
    }

    #[test]
    fn should_keep_page_metadata() {
        let list = List::<StorySummary>::load(stories(json!([story(7)]))).unwrap();

        assert_eq!(20, list.offset());
        assert_eq!(3, list.limit());
        assert_eq!(1000, list.total());
        assert_eq!(3, list.count());
        assert_eq!(
            Some("0b1c8a0e5ed5b0f1ec2b1f8a8c3e4e6e0a2c7d0f"),
            list.response().etag.as_deref()
        );
        assert!(list.response().data.results.is_empty());
    }

    #[test]
    fn should_fail_whole_list_on_one_bad_element() {
        let broken = json!({ "name": "no resource uri" });

        let result = List::<StorySummary>::load(stories(json!([story(7), broken, story(9)])));

        assert!(matches!(result, Err(ApiError::Invariant(_))));
    }

    #[test]
    fn should_fail_on_error_code() {
        let result = List::<StorySummary>::load(json!({
            "code": 409,
            "status": "You may not request more than 100 items."
        }));

        let Err(err) = result else {
            panic!("expected an error");
        };

        assert_eq!(Some("You may not request more than 100 items."), err.status());
    }

    #[test]
    fn should_own_items_when_consumed() {
        let list = List::<StorySummary>::load(stories(json!([story(7), story(8)]))).unwrap();

        let names: Vec<String> = list.into_iter().map(|story| story.name).collect();
        assert_eq!(vec!["story 7".to_string(), "story 8".to_string()], names);
    }
}
