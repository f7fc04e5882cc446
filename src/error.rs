use std::fmt;
use std::num::{ParseFloatError, ParseIntError};
use std::str::Utf8Error;

/// Boxed error returned by [`UnmarshalText`](crate::UnmarshalText) hooks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur while decoding a querystring into a struct.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `decode` was given something it cannot write through.
    #[error(transparent)]
    InvalidTarget(#[from] InvalidTarget),

    /// The querystring is malformed, e.g. a broken percent escape.
    #[error("parsing failed with error: '{message}' at position: {position}")]
    Parse { message: String, position: usize },

    /// A percent-decoded key or value is not valid UTF-8.
    #[error("invalid UTF-8 in querystring: {0}")]
    Utf8(#[from] Utf8Error),

    /// A registered field has a kind that cannot be decoded from a flat
    /// querystring (maps, nested structs).
    #[error("`{type_name}` is not supported as a query field")]
    Unsupported { type_name: &'static str },

    /// A value could not be converted to the field's scalar type.
    #[error("invalid value `{value}` for `{key}`: {source}")]
    Conversion {
        key: String,
        value: String,
        source: ConversionError,
    },

    /// Error returned by a field's [`UnmarshalText`](crate::UnmarshalText) hook.
    #[error("{0}")]
    Custom(#[source] BoxError),
}

/// Describes a target that `decode` refused before touching the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidTarget {
    /// No target at all.
    #[error("cannot decode into an absent target")]
    Absent,
    /// The struct was passed by value.
    #[error("cannot decode into non-reference `{0}`")]
    NotReference(&'static str),
    /// A reference-like handle with nothing behind it.
    #[error("cannot decode into empty reference `{0}`")]
    NullReference(&'static str),
}

impl InvalidTarget {
    /// Name of the rejected type, `None` for an absent target.
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            InvalidTarget::Absent => None,
            InvalidTarget::NotReference(name) | InvalidTarget::NullReference(name) => {
                Some(*name)
            }
        }
    }
}

/// The underlying failure of a scalar conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("{0}")]
    Int(#[source] ParseIntError),
    #[error("{0}")]
    Float(#[source] ParseFloatError),
    /// A finite literal too large for the float width.
    #[error("number too large to fit in target type")]
    FloatRange,
    /// A `+` in front of an unsigned integer.
    #[error("unsigned number cannot have a sign")]
    Sign,
    /// Not one of the accepted boolean literals.
    #[error("invalid boolean literal")]
    Bool,
}

impl Error {
    /// Generate a parsing error message with position.
    pub fn parse_err<T>(msg: T, position: usize) -> Self
    where
        T: fmt::Display,
    {
        Error::Parse {
            message: msg.to_string(),
            position,
        }
    }

    /// Generate the error for a field kind that cannot be decoded.
    pub fn unsupported<T: ?Sized>() -> Self {
        Error::Unsupported {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Wrap the error returned by a custom text hook.
    pub fn custom<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        Error::Custom(err.into())
    }
}
