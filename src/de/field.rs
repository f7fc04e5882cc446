use std::collections::{BTreeMap, HashMap};

use super::parse::ParsedMap;
use super::scalar::Scalar;
use super::Decode;
use crate::error::{BoxError, Error, Result};

/// Hands the parsed query to a [`Decode`] implementation, one registered
/// field at a time.
///
/// Every registration method leaves the field untouched when its key is not
/// present in the query.
pub struct Fields<'a> {
    parsed: &'a ParsedMap,
    matched: usize,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(parsed: &'a ParsedMap) -> Self {
        Fields { parsed, matched: 0 }
    }

    /// Number of registered fields whose key was present so far.
    pub fn matched(&self) -> usize {
        self.matched
    }

    fn lookup(&mut self, key: &str) -> Option<Values<'a>> {
        let Some((key, raw)) = self.parsed.get_key_value(key) else {
            tracing::trace!(key, "key absent, field left untouched");
            return None;
        };
        let key = key.as_str();
        tracing::trace!(key, values = raw.len(), "key matched");
        self.matched += 1;
        Some(Values { key, raw })
    }

    /// Registers `field` under `key`.
    pub fn field<F>(&mut self, key: &str, field: &mut F) -> Result<()>
    where
        F: Field + ?Sized,
    {
        match self.lookup(key) {
            Some(values) => field.decode_field(values),
            None => Ok(()),
        }
    }

    /// Registers a nested struct under `key`.
    ///
    /// Flat querystrings cannot describe nested structs, so a present key is
    /// an [`Error::Unsupported`] naming `D`.
    pub fn nested<D>(&mut self, key: &str, _field: &mut D) -> Result<()>
    where
        D: Decode + ?Sized,
    {
        match self.lookup(key) {
            Some(_) => Err(Error::unsupported::<D>()),
            None => Ok(()),
        }
    }
}

/// The values given for one key, in the order they appeared.
///
/// Never empty.
#[derive(Clone, Copy, Debug)]
pub struct Values<'a> {
    key: &'a str,
    raw: &'a [String],
}

impl<'a> Values<'a> {
    pub fn key(&self) -> &'a str {
        self.key
    }

    /// The first value. Scalars and hooks only ever look at this one.
    pub fn first(&self) -> &'a str {
        self.raw.first().map_or("", String::as_str)
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.raw.iter().map(String::as_str)
    }

    /// Converts `raw` to `T`, reporting failures against this key.
    pub fn convert<T: Scalar>(&self, raw: &str) -> Result<T> {
        T::from_query(raw).map_err(|source| Error::Conversion {
            key: self.key.to_owned(),
            value: raw.to_owned(),
            source,
        })
    }
}

/// A struct field that can be overwritten from the values of its key.
///
/// Implemented for the scalar types, `[T; N]` and `Vec<T>` of scalars,
/// `Option<F>` of any field, and every [`UnmarshalText`] type.
pub trait Field {
    fn decode_field(&mut self, values: Values<'_>) -> Result<()>;
}

/// Custom text conversion for a field type.
///
/// The hook receives the first value given for the key. An empty first
/// value means there is nothing to set and the hook is not called.
///
/// ```
/// use qs_fields::UnmarshalText;
///
/// #[derive(Debug, Default, PartialEq)]
/// enum Order {
///     #[default]
///     Asc,
///     Desc,
/// }
///
/// impl UnmarshalText for Order {
///     type Err = String;
///
///     fn unmarshal_text(&mut self, text: &str) -> Result<(), String> {
///         *self = match text {
///             "asc" => Order::Asc,
///             "desc" => Order::Desc,
///             other => return Err(format!("unknown order `{other}`")),
///         };
///         Ok(())
///     }
/// }
///
/// #[derive(Default)]
/// struct Listing {
///     order: Order,
/// }
///
/// qs_fields::decode_fields! {
///     Listing { order => "order" }
/// }
///
/// let listing: Listing = qs_fields::from_str("order=desc").unwrap();
/// assert_eq!(listing.order, Order::Desc);
/// assert!(qs_fields::from_str::<Listing>("order=up").is_err());
/// ```
pub trait UnmarshalText {
    type Err: Into<BoxError>;

    fn unmarshal_text(&mut self, text: &str) -> Result<(), Self::Err>;
}

impl<T: UnmarshalText> Field for T {
    fn decode_field(&mut self, values: Values<'_>) -> Result<()> {
        let text = values.first();
        if text.is_empty() {
            tracing::trace!(key = values.key(), "empty value, text hook skipped");
            return Ok(());
        }
        self.unmarshal_text(text).map_err(Error::custom)
    }
}

macro_rules! scalar_field {
    ($($ty:ty),*) => {
        $(
            impl Field for $ty {
                fn decode_field(&mut self, values: Values<'_>) -> Result<()> {
                    *self = values.convert(values.first())?;
                    Ok(())
                }
            }
        )*
    };
}

scalar_field!(String, bool);
scalar_field!(i8, i16, i32, i64, i128, isize);
scalar_field!(u8, u16, u32, u64, u128, usize);
scalar_field!(f32, f64);

/// Replaced by exactly the given values.
impl<T: Scalar> Field for Vec<T> {
    fn decode_field(&mut self, values: Values<'_>) -> Result<()> {
        *self = values
            .iter()
            .map(|raw| values.convert(raw))
            .collect::<Result<_>>()?;
        Ok(())
    }
}

/// Overwritten from the front; elements past the last value keep their
/// contents and values past the end are ignored.
impl<T: Scalar, const N: usize> Field for [T; N] {
    fn decode_field(&mut self, values: Values<'_>) -> Result<()> {
        for (slot, raw) in self.iter_mut().zip(values.iter()) {
            *slot = values.convert(raw)?;
        }
        Ok(())
    }
}

/// `None` is replaced with `F::default()` before decoding; an existing value
/// is decoded in place.
impl<F: Field + Default> Field for Option<F> {
    fn decode_field(&mut self, values: Values<'_>) -> Result<()> {
        self.get_or_insert_with(F::default).decode_field(values)
    }
}

impl<K, V, S> Field for HashMap<K, V, S> {
    fn decode_field(&mut self, _values: Values<'_>) -> Result<()> {
        Err(Error::unsupported::<Self>())
    }
}

impl<K, V> Field for BTreeMap<K, V> {
    fn decode_field(&mut self, _values: Values<'_>) -> Result<()> {
        Err(Error::unsupported::<Self>())
    }
}
