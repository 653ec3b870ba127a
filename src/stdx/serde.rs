use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{self, Deserialize, Deserializer};

/// Format of `modified` and of the dates listed on a comic.
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";
/// Format of an event's `start` and `end`.
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn i64_from_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct Visitor;

    impl serde::de::Visitor<'_> for Visitor {
        type Value = i64;

        fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("i64 or string containing an i64")
        }

        fn visit_i64<E>(self, v: i64) -> Result<i64, E>
        where
            E: serde::de::Error,
        {
            Ok(v)
        }

        fn visit_u64<E>(self, v: u64) -> Result<i64, E>
        where
            E: serde::de::Error,
        {
            i64::try_from(v).map_err(E::custom)
        }

        fn visit_str<E>(self, v: &str) -> Result<i64, E>
        where
            E: serde::de::Error,
        {
            v.parse::<i64>().map_err(E::custom)
        }
    }

    deserializer.deserialize_any(Visitor)
}

/// Parses an optional `2017-08-10T16:46:27-0400` timestamp.
///
/// The API uses `-0001-11-30T00:00:00-0500` for "no date", which maps to `None`.
pub fn datetime_optional<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    if raw.is_empty() || raw.starts_with('-') {
        return Ok(None);
    }

    DateTime::parse_from_str(&raw, DATETIME_FORMAT)
        .map(Some)
        .map_err(|err| serde::de::Error::custom(format!("`{raw}` is not a valid timestamp: {err}")))
}

/// Parses an optional `2017-04-19 00:00:00` or `2017-04-19` into just the date.
pub fn date_optional<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    if raw.is_empty() {
        return Ok(None);
    }

    NaiveDateTime::parse_from_str(&raw, DATE_TIME_FORMAT)
        .map(|datetime| datetime.date())
        .or_else(|_| NaiveDate::parse_from_str(&raw, DATE_FORMAT))
        .map(Some)
        .map_err(|err| serde::de::Error::custom(format!("`{raw}` is not a valid date: {err}")))
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{Datelike, Timelike};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Dates {
        #[serde(deserialize_with = "i64_from_string")]
        id: i64,
        #[serde(default, deserialize_with = "datetime_optional")]
        modified: Option<DateTime<FixedOffset>>,
        #[serde(default, deserialize_with = "date_optional")]
        start: Option<NaiveDate>,
    }

    #[test]
    fn should_parse_id_from_string_or_number() {
        let from_str: Dates = serde_json::from_value(json!({ "id": "336" })).unwrap();
        let from_num: Dates = serde_json::from_value(json!({ "id": 336 })).unwrap();
        let negative: Dates = serde_json::from_value(json!({ "id": "-1" })).unwrap();

        assert_eq!(336, from_str.id);
        assert_eq!(336, from_num.id);
        assert_eq!(-1, negative.id);
    }

    #[test]
    fn should_reject_non_numeric_id() {
        let result = serde_json::from_value::<Dates>(json!({ "id": "secret-empire" }));
        assert!(result.is_err());
    }

    #[test]
    fn should_parse_modified_with_offset() {
        let dates: Dates =
            serde_json::from_value(json!({ "id": 1, "modified": "2017-08-10T16:46:27-0400" }))
                .unwrap();

        let modified = dates.modified.unwrap();
        assert_eq!(2017, modified.year());
        assert_eq!(16, modified.hour());
        assert_eq!(-4 * 3600, modified.offset().local_minus_utc());
    }

    #[test]
    fn should_treat_negative_year_sentinel_as_none() {
        let dates: Dates =
            serde_json::from_value(json!({ "id": 1, "modified": "-0001-11-30T00:00:00-0500" }))
                .unwrap();

        assert_eq!(None, dates.modified);
    }

    #[test]
    fn should_reject_malformed_modified() {
        let result =
            serde_json::from_value::<Dates>(json!({ "id": 1, "modified": "last tuesday" }));
        assert!(result.is_err());
    }

    #[test]
    fn should_parse_event_dates_with_and_without_time() {
        let with_time: Dates =
            serde_json::from_value(json!({ "id": 1, "start": "2017-04-19 00:00:00" })).unwrap();
        let without_time: Dates =
            serde_json::from_value(json!({ "id": 1, "start": "2017-04-19" })).unwrap();
        let null: Dates = serde_json::from_value(json!({ "id": 1, "start": null })).unwrap();

        assert_eq!(NaiveDate::from_ymd_opt(2017, 4, 19), with_time.start);
        assert_eq!(NaiveDate::from_ymd_opt(2017, 4, 19), without_time.start);
        assert_eq!(None, null.start);
    }
}
