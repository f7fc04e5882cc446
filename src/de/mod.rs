//! Decoding querystrings into declared struct fields.

//! ### An overview of the design of `Decoder`
//!
//! Decoding happens in two steps. The `parse` module turns the querystring
//! into a map from each (percent-decoded) key to the list of values it was
//! given. Repeated keys keep every value in order, and a bare `key` counts as
//! a single empty value.
//!
//! The target then walks its own fields through [`Decode::decode_fields`],
//! registering each one with a [`Fields`] handle under its lookup key. The
//! field's [`Field`] implementation picks the conversion for its kind:
//! scalars read the first value, sequences and arrays read them all, and
//! [`UnmarshalText`] types get the first value through their hook.
//!
//! Fields are written in place. Anything whose key is missing from the query
//! keeps the value the caller gave it, which is how defaults work.

mod field;
mod parse;
mod scalar;

pub use field::{Field, Fields, UnmarshalText, Values};
pub use scalar::Scalar;

use crate::config::Config;
use crate::error::{Error, InvalidTarget, Result};

/// A struct whose fields can be populated from a querystring.
///
/// Implementations register every participating field, in order, and
/// return the first error. Usually generated with
/// [`decode_fields!`](crate::decode_fields):
///
/// ```
/// use qs_fields::{Decode, Fields, Result};
///
/// #[derive(Default)]
/// struct Options {
///     foo: i32,
///     bar: String,
///     internal: u8,
/// }
///
/// impl Decode for Options {
///     fn decode_fields(&mut self, fields: &mut Fields<'_>) -> Result<()> {
///         fields.field("foo", &mut self.foo)?;
///         fields.field("bar", &mut self.bar)?;
///         Ok(())
///     }
/// }
///
/// let mut options = Options::default();
/// qs_fields::decode("foo=2&bar=baz&internal=1", &mut options).unwrap();
/// assert_eq!(options.foo, 2);
/// assert_eq!(options.bar, "baz");
/// assert_eq!(options.internal, 0);
/// ```
pub trait Decode {
    fn decode_fields(&mut self, fields: &mut Fields<'_>) -> Result<()>;
}

/// Something handed to [`Decoder::decode`].
///
/// Only a mutable reference to a [`Decode`] type resolves. The other
/// implementations exist to report what was passed instead:
///
/// - `Option<&mut D>` holding `None` is an empty reference,
/// - `()` is the absent target,
/// - types declared with [`decode_fields!`](crate::decode_fields) refuse to be
///   decoded by value.
pub trait Target {
    fn resolve(&mut self) -> Result<&mut dyn Decode, InvalidTarget>;
}

impl<D: Decode> Target for &mut D {
    fn resolve(&mut self) -> Result<&mut dyn Decode, InvalidTarget> {
        Ok(&mut **self)
    }
}

impl<D: Decode> Target for Option<&mut D> {
    fn resolve(&mut self) -> Result<&mut dyn Decode, InvalidTarget> {
        match self {
            Some(target) => Ok(&mut **target),
            None => Err(InvalidTarget::NullReference(std::any::type_name::<Self>())),
        }
    }
}

impl Target for () {
    fn resolve(&mut self) -> Result<&mut dyn Decode, InvalidTarget> {
        Err(InvalidTarget::Absent)
    }
}

/// Decodes a querystring into `target`.
///
/// ```
/// #[derive(Debug, Default, PartialEq)]
/// struct Page {
///     number: u32,
///     size: u32,
///     verbose: bool,
/// }
///
/// qs_fields::decode_fields! {
///     Page { number => "page", size => "size", verbose => "v" }
/// }
///
/// let mut page = Page { number: 1, size: 20, verbose: false };
/// qs_fields::decode("page=3&v", &mut page).unwrap();
/// assert_eq!(page, Page { number: 3, size: 20, verbose: true });
/// ```
pub fn decode<T: Target>(input: &str, target: T) -> Result<()> {
    Config::default().decode(input, target)
}

/// Decodes a querystring into `T::default()`.
///
/// ```
/// #[derive(Debug, Default, PartialEq)]
/// struct Query {
///     name: String,
///     age: u8,
///     tags: Vec<String>,
/// }
///
/// qs_fields::decode_fields! {
///     Query { name => "name", age => "age", tags => "tag" }
/// }
///
/// assert_eq!(
///     qs_fields::from_str::<Query>("name=Alice&age=24&tag=a&tag=b").unwrap(),
///     Query {
///         name: "Alice".to_owned(),
///         age: 24,
///         tags: vec!["a".to_owned(), "b".to_owned()],
///     }
/// );
/// ```
pub fn from_str<T: Decode + Default>(input: &str) -> Result<T> {
    Config::default().from_str(input)
}

/// Reads a querystring and decodes it into targets.
///
/// The decoder only borrows its input and can be reused for any number of
/// targets.
#[derive(Clone, Copy, Debug)]
pub struct Decoder<'qs> {
    input: &'qs str,
    config: Config,
}

impl<'qs> Decoder<'qs> {
    pub fn new(input: &'qs str) -> Self {
        Self::with_config(Config::default(), input)
    }

    pub fn with_config(config: Config, input: &'qs str) -> Self {
        Decoder { input, config }
    }

    /// Decodes the querystring into the value behind `target`.
    ///
    /// The target is checked before the input is parsed. Decoding stops at
    /// the first failing field; fields registered before it keep their new
    /// values.
    pub fn decode<T: Target>(&self, mut target: T) -> Result<()> {
        let target = target.resolve().map_err(Error::InvalidTarget)?;

        let parsed = parse::parse(self.input.as_bytes(), self.config)?;
        if parsed.is_empty() {
            return Ok(());
        }
        tracing::debug!(keys = parsed.len(), "decoding querystring");

        let mut fields = Fields::new(&parsed);
        target.decode_fields(&mut fields).inspect_err(|err| {
            tracing::debug!(error = %err, matched = fields.matched(), "decoding failed");
        })
    }
}
