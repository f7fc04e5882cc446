use std::borrow::Cow;
use std::collections::HashMap;
use std::slice::Iter;

use crate::config::Config;
use crate::error::{Error, Result};

mod decode;

/// Every key maps to the values it was given, in encounter order.
///
/// A key is only ever inserted together with a value, so no entry holds an
/// empty `Vec`.
pub type ParsedMap = HashMap<String, Vec<String>>;

pub fn parse(encoded_string: &[u8], config: Config) -> Result<ParsedMap> {
    let mut parser = Parser::new(encoded_string, config);
    let mut output = ParsedMap::default();
    parser.parse(&mut output)?;

    Ok(output)
}

/// The `Parser` struct is a stateful querystring parser.
///
/// It iterates over a slice of bytes, maintaining an accumulator range `(start, end)`
/// to track the current segment being parsed. Segments are only copied once
/// they have been percent-decoded.
struct Parser<'qs> {
    inner: &'qs [u8],
    iter: Iter<'qs, u8>,
    index: usize,
    acc: (usize, usize),
    config: Config,
}

impl<'qs> Parser<'qs> {
    fn new(encoded: &'qs [u8], config: Config) -> Self {
        Parser {
            inner: encoded,
            iter: encoded.iter(),
            acc: (0, 0),
            index: 0,
            config,
        }
    }

    fn next(&mut self) -> Option<u8> {
        self.acc.1 = self.index;
        self.index += 1;
        self.iter.next().copied()
    }

    /// Resets the accumulator range by setting `(start, end)` to `(end, end)`.
    fn clear_acc(&mut self) {
        self.acc = (self.index, self.index);
    }

    /// Percent-decodes the accumulated range into an owned string.
    fn collect(&mut self) -> Result<String> {
        let (start, end) = self.acc;
        let inner = self.inner;
        let bytes = decode::decode(&inner[start..end], self.config.strict)
            .map_err(|offset| Error::parse_err("invalid percent escape", start + offset))?;
        self.clear_acc();

        if self.config.strict {
            match bytes {
                Cow::Borrowed(b) => Ok(std::str::from_utf8(b)?.to_owned()),
                Cow::Owned(b) => String::from_utf8(b).map_err(|e| Error::from(e.utf8_error())),
            }
        } else {
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }

    /// Returns `None` when nothing has been accumulated.
    fn collect_key(&mut self) -> Result<Option<String>> {
        if self.acc.0 == self.acc.1 {
            // no bytes to parse
            return Ok(None);
        }
        self.collect().map(Some)
    }

    fn collect_value(&mut self) -> Result<String> {
        // clear the accumulator to start fresh
        self.clear_acc();
        while !matches!(self.next(), None | Some(b'&')) {
            // eat bytes up until the next '&' (or end of string) as the value
        }
        self.collect()
    }

    /// Processes the querystring into the output map.
    ///
    /// Pairs are separated by `&` and split on their first `=`. A key without
    /// `=` is a flag and gets the empty string as its value.
    fn parse(&mut self, output: &mut ParsedMap) -> Result<()> {
        if self.inner.is_empty() {
            // empty string -- nothing to parse
            return Ok(());
        }
        loop {
            let Some(x) = self.next() else {
                // we reached the end of the string
                // push the key (if exists) as a flag
                if let Some(key) = self.collect_key()? {
                    push_value(output, key, String::new());
                }
                return Ok(());
            };

            match x {
                b'&' => {
                    // a flag, or an empty segment like `a=1&&b=2` which is skipped
                    if let Some(key) = self.collect_key()? {
                        push_value(output, key, String::new());
                    }
                }
                b'=' => {
                    // since we have an explicit `=` an empty key is kept
                    let key = self.collect_key()?.unwrap_or_default();
                    let value = self.collect_value()?;
                    push_value(output, key, value);
                }
                _ => {
                    // keep accumulating the key
                    continue;
                }
            }

            self.clear_acc();
        }
    }
}

fn push_value(map: &mut ParsedMap, key: String, value: String) {
    map.entry(key).or_default().push(value);
}
