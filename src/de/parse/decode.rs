use std::borrow::Cow;

use percent_encoding::percent_decode;

#[inline(always)]
fn is_hex(c: Option<&u8>) -> bool {
    c.is_some_and(u8::is_ascii_hexdigit)
}

/// Returns the offset of the first `%` that does not start a valid
/// two-digit escape.
fn invalid_escape(input: &[u8]) -> Option<usize> {
    input.iter().enumerate().find_map(|(idx, &b)| {
        let valid = b != b'%' || (is_hex(input.get(idx + 1)) && is_hex(input.get(idx + 2)));
        (!valid).then_some(idx)
    })
}

/// Decodes the input bytes, applying the following:
/// - Replaces `+` with a space
/// - Decodes percent-encoded characters
///
/// If `strict` is true, a malformed escape is an error carrying its offset
/// within `input`. Otherwise the malformed escape is kept as is.
pub fn decode(input: &[u8], strict: bool) -> Result<Cow<'_, [u8]>, usize> {
    if !input.iter().any(|&b| b == b'+' || b == b'%') {
        // nothing to decode
        return Ok(Cow::Borrowed(input));
    }

    if strict {
        if let Some(idx) = invalid_escape(input) {
            return Err(idx);
        }
    }

    // `+` must become a space before unescaping, so that `%2B` survives as `+`
    let spaced: Cow<'_, [u8]> = if input.contains(&b'+') {
        Cow::Owned(
            input
                .iter()
                .map(|&b| if b == b'+' { b' ' } else { b })
                .collect(),
        )
    } else {
        Cow::Borrowed(input)
    };

    let decoded: Cow<'_, [u8]> = percent_decode(&spaced).into();
    Ok(Cow::Owned(decoded.into_owned()))
}

#[cfg(test)]
mod test {
    use super::decode;

    use pretty_assertions::assert_eq;

    #[test]
    fn plain_input_is_borrowed() {
        let decoded = decode(b"plain", true).unwrap();
        assert!(matches!(decoded, std::borrow::Cow::Borrowed(_)));
        assert_eq!(&*decoded, b"plain");
    }

    #[test]
    fn plus_and_escapes() {
        assert_eq!(&*decode(b"a+b%20c", true).unwrap(), b"a b c");
        assert_eq!(&*decode(b"1%2B1", true).unwrap(), b"1+1");
        assert_eq!(&*decode(b"comt%C3%A9", true).unwrap(), "comté".as_bytes());
    }

    #[test]
    fn strict_rejects_malformed_escapes() {
        assert_eq!(decode(b"100%", true), Err(3));
        assert_eq!(decode(b"a%zz", true), Err(1));
        assert_eq!(decode(b"%4", true), Err(0));
    }

    #[test]
    fn lenient_keeps_malformed_escapes() {
        assert_eq!(&*decode(b"100%", false).unwrap(), b"100%");
        assert_eq!(&*decode(b"a%zz+b", false).unwrap(), b"a%zz b");
    }
}
