//! Decode flat querystrings into declared struct fields.
//!
//! A struct declares which of its fields take part and the query key each
//! one is looked up under. Decoding then overwrites exactly those fields
//! whose key appears in the query, converting the text to the field's
//! type. Everything else keeps the value it had, so a struct can be
//! pre-populated with defaults before the query is applied.
//!
//! ## Supported Types
//!
//! - `String`, `bool`, every integer width, `f32` and `f64`,
//! - `Vec<T>` and `[T; N]` of those, filled from repeated keys
//!   (`id=1&id=2`),
//! - `Option<F>` of any supported field, created on first use,
//! - any type implementing [`UnmarshalText`], e.g. the delimited lists in
//!   [`helpers`].
//!
//! A bare key with no `=` is a flag: it sets a `bool` field to `true`.
//!
//! Nested structs and maps are not supported; decoding a query that
//! mentions them fails with [`Error::Unsupported`].
//!
//! ## Usage
//!
//! ```
//! #[derive(Debug, PartialEq)]
//! struct Options {
//!     foo: i32,
//!     bar: String,
//!     arr: [i32; 4],
//!     verbose: bool,
//! }
//!
//! qs_fields::decode_fields! {
//!     Options {
//!         foo => "foo",
//!         bar => "bar",
//!         arr => "arr",
//!         verbose => "v",
//!     }
//! }
//!
//! let mut options = Options {
//!     foo: 3,
//!     bar: "default".to_owned(),
//!     arr: [4, 5, 6, 7],
//!     verbose: false,
//! };
//! qs_fields::Decoder::new("foo=2&arr=1&arr=2&v&unknown=x")
//!     .decode(&mut options)
//!     .unwrap();
//!
//! assert_eq!(
//!     options,
//!     Options {
//!         foo: 2,
//!         bar: "default".to_owned(),
//!         arr: [1, 2, 6, 7],
//!         verbose: true,
//!     }
//! );
//! ```
//!
//! ## Web frameworks
//!
//! The `axum` and `actix4` features provide `QsQuery<T>` extractors that
//! decode the request's querystring into `T::default()`.

#[macro_use]
mod macros;

mod config;
mod de;
mod error;
pub mod helpers;

#[cfg(feature = "actix4")]
pub mod actix;
#[cfg(feature = "axum")]
pub mod axum;
#[cfg(any(feature = "actix4", feature = "axum"))]
mod web;

#[doc(inline)]
pub use config::Config;
#[doc(inline)]
pub use de::{
    decode, from_str, Decode, Decoder, Field, Fields, Scalar, Target, UnmarshalText, Values,
};
pub use error::{BoxError, ConversionError, Error, InvalidTarget, Result};
