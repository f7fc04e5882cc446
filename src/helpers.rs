//! A few common text hooks for querystring values

use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use crate::de::UnmarshalText;
use crate::error::BoxError;

/// A list packed into a single value with a delimiter.
///
/// ## Example
///
/// ```
/// use qs_fields::helpers::Delimited;
///
/// #[derive(Debug, Default)]
/// struct Query {
///     values: Delimited<u8, '.'>,
/// }
///
/// qs_fields::decode_fields! {
///     Query { values => "values" }
/// }
///
/// let query: Query = qs_fields::from_str("values=1.2.3").unwrap();
/// assert_eq!(*query.values, vec![1, 2, 3]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Delimited<T, const DELIM: char>(pub Vec<T>);

impl<T, const DELIM: char> Default for Delimited<T, DELIM> {
    fn default() -> Self {
        Delimited(Vec::new())
    }
}

impl<T, const DELIM: char> Delimited<T, DELIM> {
    /// Unwrap into the inner list
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<T, const DELIM: char> Deref for Delimited<T, DELIM> {
    type Target = Vec<T>;

    fn deref(&self) -> &Vec<T> {
        &self.0
    }
}

impl<T, const DELIM: char> DerefMut for Delimited<T, DELIM> {
    fn deref_mut(&mut self) -> &mut Vec<T> {
        &mut self.0
    }
}

impl<T, const DELIM: char> From<Vec<T>> for Delimited<T, DELIM> {
    fn from(values: Vec<T>) -> Self {
        Delimited(values)
    }
}

impl<T, const DELIM: char> UnmarshalText for Delimited<T, DELIM>
where
    T: FromStr,
    <T as FromStr>::Err: Into<BoxError>,
{
    type Err = BoxError;

    fn unmarshal_text(&mut self, text: &str) -> Result<(), BoxError> {
        self.0 = text
            .split(DELIM)
            .map(|x| x.parse::<T>().map_err(Into::into))
            .collect::<Result<_, BoxError>>()?;
        Ok(())
    }
}

/// Comma-separated values
///
/// Equivalent to `style=form` query parameters in [OpenAPI 3.0](https://swagger.io/docs/specification/v3_0/serialization/#query-parameters)
///
/// ## Example
///
/// ```
/// use qs_fields::helpers::CommaSeparated;
///
/// #[derive(Debug, Default)]
/// struct Query {
///     values: CommaSeparated<u8>,
/// }
///
/// qs_fields::decode_fields! {
///     Query { values => "values" }
/// }
///
/// let query: Query = qs_fields::from_str("values=1,2,3").unwrap();
/// assert_eq!(query.values.into_inner(), vec![1, 2, 3]);
/// ```
pub type CommaSeparated<T> = Delimited<T, ','>;

/// Pipe-delimited values
///
/// Equivalent to `style=pipeDelimited` query parameters in [OpenAPI 3.0](https://swagger.io/docs/specification/v3_0/serialization/#query-parameters)
///
/// ## Example
///
/// ```
/// use qs_fields::helpers::PipeDelimited;
///
/// #[derive(Debug, Default)]
/// struct Query {
///     values: PipeDelimited<u8>,
/// }
///
/// qs_fields::decode_fields! {
///     Query { values => "values" }
/// }
///
/// let query: Query = qs_fields::from_str("values=1|2|3").unwrap();
/// assert_eq!(query.values.into_inner(), vec![1, 2, 3]);
/// ```
pub type PipeDelimited<T> = Delimited<T, '|'>;

/// Space-delimited values
///
/// Equivalent to `style=spaceDelimited` query parameters in [OpenAPI 3.0](https://swagger.io/docs/specification/v3_0/serialization/#query-parameters)
///
/// ## Example
///
/// ```
/// use qs_fields::helpers::SpaceDelimited;
///
/// #[derive(Debug, Default)]
/// struct Query {
///     values: SpaceDelimited<u8>,
/// }
///
/// qs_fields::decode_fields! {
///     Query { values => "values" }
/// }
///
/// let query: Query = qs_fields::from_str("values=1+2%203").unwrap();
/// assert_eq!(query.values.into_inner(), vec![1, 2, 3]);
/// ```
pub type SpaceDelimited<T> = Delimited<T, ' '>;
