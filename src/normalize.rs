//! Reshapes raw Marvel API JSON into something the entity structs can be deserialized from.
//!
//! Every payload goes through the same steps before any field is coerced:
//!
//! 1. A `code` other than `200` is turned into an [`ApiError::Status`].
//! 2. An [`Payload::Envelope`] is unwrapped to its single `data.results[0]` entity.
//! 3. `id` is derived from the last segment of `resourceURI`, whatever `id` the payload claimed.
//! 4. `thumbnail` is collapsed from `{path, extension}` into a single URL, leaving `null` alone.
//! 5. Collections wrapped as `{"available": N, "items": [...]}` are replaced by their `items`.
//! 6. Every nested summary gets the same `id` treatment as its parent.
//!
//! Which fields are collections, which are single nested references and which are images
//! differs per entity kind, and is described by that kind's [`Shape`].

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{
    errors::ApiError,
    stdx::error::{InternalInvariant, Invariant, invariant},
};

/// Raw JSON as handed over by a transport, tagged with what it is.
///
/// The API itself doesn't tag anything: a full response and a bare entity are both just objects.
/// Guessing by looking for a `status` key would misread any entity that happens to have a field
/// by that name, so callers say which one they have.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// A full top-level response, with `code`, `status` and `data.results`.
    Envelope(Value),
    /// A single entity object, already taken out of its envelope.
    Entity(Value),
}

/// Describes where an entity kind nests other entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    /// Name of the entity kind, used in error messages.
    pub kind: &'static str,
    /// Fields wrapped as `{"available": N, "items": [...]}`.
    pub collections: &'static [&'static str],
    /// Fields holding a single summary, or a plain array of summaries.
    pub references: &'static [&'static str],
    /// Fields holding a plain array of `{path, extension}` images.
    pub images: &'static [&'static str],
    /// Whether the original envelope is kept on the entity under `response`.
    pub keeps_response: bool,
}

impl Shape {
    /// A shape with nothing nested, as used by all summaries.
    pub const SUMMARY: Self = Self {
        kind: "summary",
        collections: &[],
        references: &[],
        images: &[],
        keeps_response: false,
    };
}

/// An entity kind that can be built from a [`Payload`].
///
/// The struct itself only has to describe its fields with `serde`; [`Schema::load`] runs the
/// payload through [`normalize`] first.
pub trait Schema: DeserializeOwned {
    /// Where this kind nests other entities.
    const SHAPE: Shape;

    /// Normalizes `payload` and deserializes the result into `Self`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Status`] if the payload carries a `code` other than `200`
    /// - [`ApiError::Invariant`] if the payload doesn't have the expected structure
    /// - [`ApiError::Validation`] if a field is missing or has the wrong type
    fn load(payload: Payload) -> Result<Self, ApiError> {
        let entity = normalize(payload, &Self::SHAPE)?;

        serde_json::from_value(Value::Object(entity)).map_err(|source| ApiError::Validation {
            kind: Self::SHAPE.kind,
            source,
        })
    }
}

/// Runs `payload` through the normalization steps for an entity of the given `shape`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for a non-200 `code`, and [`ApiError::Invariant`] when
/// the JSON doesn't have the structure the steps rely on.
pub fn normalize(payload: Payload, shape: &Shape) -> Result<Map<String, Value>, ApiError> {
    let mut entity = match payload {
        Payload::Envelope(mut envelope) => {
            check_code(&envelope)?;

            let result = if shape.keeps_response {
                envelope.pointer("/data/results/0").cloned()
            } else {
                envelope.pointer_mut("/data/results/0").map(Value::take)
            };

            let Some(Value::Object(mut entity)) = result else {
                invariant!("`{}` envelope has no object at `data.results[0]`", shape.kind);
            };

            if shape.keeps_response {
                entity.insert("response".into(), envelope);
            }

            entity
        }
        Payload::Entity(value) => {
            check_code(&value)?;

            let Value::Object(entity) = value else {
                invariant!("`{}` payload was not a JSON object", shape.kind);
            };

            entity
        }
    };

    derive_id(&mut entity)?;
    collapse_thumbnail(&mut entity)?;

    for field in shape.collections {
        unwrap_collection(&mut entity, field)?;
    }

    for field in shape.references {
        normalize_references(&mut entity, field)?;
    }

    for field in shape.images {
        collapse_images(&mut entity, field)?;
    }

    Ok(entity)
}

pub(crate) fn check_code(value: &Value) -> Result<(), ApiError> {
    let Some(code) = value.get("code") else {
        return Ok(());
    };

    if code.as_u64() == Some(200) {
        return Ok(());
    }

    let code = match code {
        Value::String(code) => code.clone(),
        other => other.to_string(),
    };

    // Gateway errors (bad credentials, missing params) use `message` instead of `status`.
    let status = value
        .get("status")
        .or_else(|| value.get("message"))
        .and_then(Value::as_str)
        .map(str::to_owned);

    tracing::debug!(%code, ?status, "api returned an error code");

    Err(ApiError::Status { code, status })
}

/// Returns the trailing path segment of a `resourceURI`, or all of it when there is no `/`.
pub(crate) fn id_from_resource_uri(uri: &str) -> Result<&str, InternalInvariant> {
    let id = uri
        .rsplit('/')
        .next()
        .invariant(format!("`resourceURI` `{uri}` has no segments"))?;

    invariant!(!id.is_empty(), "`resourceURI` `{uri}` has an empty last segment");

    Ok(id)
}

fn derive_id(entity: &mut Map<String, Value>) -> Result<(), InternalInvariant> {
    let uri = entity
        .get("resourceURI")
        .and_then(Value::as_str)
        .invariant("entity is missing a `resourceURI` string")?;

    let id = id_from_resource_uri(uri)?.to_owned();
    entity.insert("id".into(), Value::String(id));

    Ok(())
}

fn image_url(image: &Value) -> Result<String, InternalInvariant> {
    let path = image
        .get("path")
        .and_then(Value::as_str)
        .invariant("image is missing a `path` string")?;

    let extension = image
        .get("extension")
        .and_then(Value::as_str)
        .invariant("image is missing an `extension` string")?;

    Ok(format!("{path}.{extension}"))
}

fn collapse_thumbnail(entity: &mut Map<String, Value>) -> Result<(), InternalInvariant> {
    if let Some(thumbnail) = entity.get_mut("thumbnail")
        && !thumbnail.is_null()
    {
        let url = image_url(thumbnail)?;
        *thumbnail = Value::String(url);
    }

    Ok(())
}

fn collapse_images(entity: &mut Map<String, Value>, field: &str) -> Result<(), InternalInvariant> {
    let Some(images) = entity.get_mut(field) else {
        return Ok(());
    };

    match images {
        Value::Null => *images = Value::Array(Vec::new()),
        Value::Array(images) => {
            for image in images {
                let url = image_url(image)?;
                *image = Value::String(url);
            }
        }
        _ => invariant!("`{field}` was not a list of images"),
    }

    Ok(())
}

fn summary(value: Value, field: &str) -> Result<Value, InternalInvariant> {
    let Value::Object(mut summary) = value else {
        invariant!("item in `{field}` was not a JSON object");
    };

    derive_id(&mut summary)?;
    collapse_thumbnail(&mut summary)?;

    Ok(Value::Object(summary))
}

fn unwrap_collection(
    entity: &mut Map<String, Value>,
    field: &str,
) -> Result<(), InternalInvariant> {
    let Some(value) = entity.get_mut(field) else {
        return Ok(());
    };

    let items = match value.take() {
        Value::Null => Vec::new(),
        Value::Object(mut list) => match list.remove("items") {
            Some(Value::Array(items)) => items,
            _ => invariant!("`{field}` has no `items` list"),
        },
        _ => invariant!("`{field}` was not an `{{available, items}}` object"),
    };

    let items = items
        .into_iter()
        .map(|item| summary(item, field))
        .collect::<Result<Vec<_>, _>>()?;

    *value = Value::Array(items);

    Ok(())
}

fn normalize_references(
    entity: &mut Map<String, Value>,
    field: &str,
) -> Result<(), InternalInvariant> {
    let Some(value) = entity.get_mut(field) else {
        return Ok(());
    };

    *value = match value.take() {
        Value::Null => Value::Null,
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| summary(item, field))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        object @ Value::Object(_) => summary(object, field)?,
        _ => invariant!("`{field}` was not a summary or a list of summaries"),
    };

    Ok(())
}
