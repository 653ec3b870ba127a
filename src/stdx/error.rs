use thiserror::Error;

macro_rules! invariant {
    ($msg:literal $(, $args:expr)* ) => {{
        return Err($crate::stdx::error::InternalInvariant::from(format!($msg $(, $args)*)).into());
    }};
    ($cond:expr, $msg:literal $(, $args:expr)* ) => {{
        if !$cond {
            return Err($crate::stdx::error::InternalInvariant::from(format!("`{}`, {}", stringify!($cond), format!($msg $(, $args)*))).into());
        }
    }};
}

pub(crate) use invariant;

/// A payload from the Marvel API did not have the shape the mapping layer relies on.
///
/// This is raised before any field coercion happens, when the structure of the
/// JSON itself is off: a `resourceURI` that is missing, a `thumbnail` without a
/// `path`, a collection that isn't an `{"available", "items"}` object, and so on.
#[derive(Debug, Error)]
#[error("payload invariant violated: {0}")]
pub struct InternalInvariant(String);

impl From<String> for InternalInvariant {
    #[inline]
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

pub(crate) trait Invariant<T> {
    type Output;

    fn invariant(self, msg: impl Into<String>) -> Self::Output;
}

impl<T> Invariant<T> for Option<T> {
    type Output = Result<T, InternalInvariant>;

    #[inline]
    fn invariant(self, msg: impl Into<String>) -> Self::Output {
        self.ok_or_else(|| InternalInvariant(msg.into()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::normalize::id_from_resource_uri;
    use pretty_assertions::assert_eq;

    #[test]
    fn should_pass_through_when_upheld() -> Result<(), InternalInvariant> {
        assert_eq!(
            "336",
            id_from_resource_uri("http://gateway.marvel.com/v1/public/events/336")?
        );
        Ok(())
    }

    #[test]
    fn should_bail_on_condition_fail_with_message() {
        let err = id_from_resource_uri("http://gateway.marvel.com/v1/public/events/").unwrap_err();
        assert_eq!(
            "payload invariant violated: `!id.is_empty()`, `resourceURI` `http://gateway.marvel.com/v1/public/events/` has an empty last segment",
            err.to_string()
        );
    }

    #[test]
    fn should_bail_with_message() {
        fn bail() -> Result<(), InternalInvariant> {
            invariant!("`{}` was not an object", "thumbnail");
        }

        assert_eq!(
            "payload invariant violated: `thumbnail` was not an object",
            bail().unwrap_err().to_string()
        );
    }

    #[test]
    fn should_turn_none_into_invariant() {
        let path: Option<&str> = None;

        let err = path.invariant("image is missing a `path` string").unwrap_err();

        assert_eq!(
            "payload invariant violated: image is missing a `path` string",
            err.to_string()
        );
        assert_eq!(Ok("http://x"), Some("http://x").invariant("unused").map_err(|err| err.0));
    }
}
