use crate::de::{Decode, Decoder, Target};
use crate::error::Result;

/// Configuration for decoding behavior.
///
/// The `Config` struct allows you to customize how `qs_fields` treats
/// querystrings that are not cleanly encoded.
///
/// ## Strict mode
///
/// In strict mode (the default) a `%` that is not followed by two hex
/// digits is a parse error, and so is a percent-decoded key or value that
/// is not valid UTF-8.
///
/// Lenient mode is opt-in and gives up that guarantee: with `strict(false)`
/// a malformed escape is not an error but is kept verbatim in the decoded
/// text, and invalid UTF-8 is replaced with `U+FFFD`. Use it only for
/// clients known to send sloppy querystrings.
///
/// ```
/// use qs_fields::Config;
///
/// #[derive(Default)]
/// struct Search {
///     q: String,
/// }
///
/// qs_fields::decode_fields! {
///     Search { q => "q" }
/// }
///
/// let mut search = Search::default();
/// assert!(Config::new().decode("q=100%", &mut search).is_err());
///
/// Config::new().strict(false).decode("q=100%", &mut search).unwrap();
/// assert_eq!(search.q, "100%");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub(crate) strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub const fn new() -> Self {
        Self { strict: true }
    }

    /// Reject malformed percent escapes and invalid UTF-8. Default is `true`.
    ///
    /// Passing `false` opts out of the parse errors for malformed escapes.
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Decodes `input` into `target` using this `Config`.
    pub fn decode<T: Target>(self, input: &str, target: T) -> Result<()> {
        Decoder::with_config(self, input).decode(target)
    }

    /// Decodes `input` into a fresh `T::default()` using this `Config`.
    pub fn from_str<T: Decode + Default>(self, input: &str) -> Result<T> {
        let mut value = T::default();
        self.decode(input, &mut value)?;
        Ok(value)
    }
}
