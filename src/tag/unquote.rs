//! String literal unquoting
//!
//! Field tags arrive wrapped in the declaration's own string-literal quoting,
//! and every tag value is itself a double-quoted literal. Two forms are
//! understood:
//!
//! - raw literals delimited by back-quotes, taken verbatim (carriage returns
//!   are dropped)
//! - interpreted literals delimited by double quotes, with backslash escapes
//!
//! ```
//! use tagcheck::tag::unquote;
//!
//! assert_eq!(unquote(r#""a\tb""#).unwrap(), "a\tb");
//! assert_eq!(unquote("`json:\"name\"`").unwrap(), "json:\"name\"");
//! assert!(unquote(r#""\q""#).is_err());
//! ```

use super::UnquoteError;

/// Unquote a raw or interpreted string literal
///
/// Escapes that produce bytes which are not valid UTF-8 (`\xff`, `\377`) are
/// decoded lossily.
pub fn unquote(literal: &str) -> Result<String, UnquoteError> {
    let first = literal.chars().next().ok_or(UnquoteError::TooShort)?;
    match first {
        '`' => {
            let inner = inner(literal, b'`')?;
            if let Some(pos) = inner.find('`') {
                return Err(UnquoteError::StrayQuote(pos + 1));
            }
            Ok(inner.replace('\r', ""))
        },
        '"' => unquote_interpreted(inner(literal, b'"')?),
        other => Err(UnquoteError::UnsupportedQuote(other)),
    }
}

/// Unquote a double-quoted literal, rejecting every other form
///
/// This is the form tag values take.
pub fn unquote_double(literal: &str) -> Result<String, UnquoteError> {
    match literal.chars().next() {
        Some('"') => unquote_interpreted(inner(literal, b'"')?),
        Some(other) => Err(UnquoteError::UnsupportedQuote(other)),
        None => Err(UnquoteError::TooShort),
    }
}

/// Strip matching delimiters, returning the content between them
fn inner(literal: &str, quote: u8) -> Result<&str, UnquoteError> {
    let bytes = literal.as_bytes();
    if bytes.len() < 2 {
        return Err(UnquoteError::TooShort);
    }
    if bytes[0] != quote || bytes[bytes.len() - 1] != quote {
        return Err(UnquoteError::Unterminated);
    }
    // Both delimiters are ASCII, so these are char boundaries.
    Ok(&literal[1..literal.len() - 1])
}

fn unquote_interpreted(inner: &str) -> Result<String, UnquoteError> {
    let bytes = inner.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' => return Err(UnquoteError::StrayQuote(i + 1)),
            b'\n' => return Err(UnquoteError::Newline(i + 1)),
            b'\\' => i += unescape(bytes, i, &mut out)?,
            b => {
                out.push(b);
                i += 1;
            },
        }
    }

    Ok(match String::from_utf8(out) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

/// Decode the escape sequence starting at `bytes[at]` (a backslash)
///
/// Returns the number of input bytes consumed.
fn unescape(bytes: &[u8], at: usize, out: &mut Vec<u8>) -> Result<usize, UnquoteError> {
    // Offsets in errors are relative to the whole literal.
    let pos = at + 1;
    let c = *bytes.get(at + 1).ok_or(UnquoteError::InvalidEscape(pos))?;

    let simple = match c {
        b'a' => Some(0x07),
        b'b' => Some(0x08),
        b'f' => Some(0x0c),
        b'n' => Some(b'\n'),
        b'r' => Some(b'\r'),
        b't' => Some(b'\t'),
        b'v' => Some(0x0b),
        b'\\' => Some(b'\\'),
        b'"' => Some(b'"'),
        _ => None,
    };
    if let Some(b) = simple {
        out.push(b);
        return Ok(2);
    }

    match c {
        b'x' => {
            let v = digits(bytes, at + 2, 2, 16).ok_or(UnquoteError::InvalidEscape(pos))?;
            out.push(u8::try_from(v).map_err(|_| UnquoteError::OutOfRange(pos))?);
            Ok(4)
        },
        b'u' | b'U' => {
            let width = if c == b'u' { 4 } else { 8 };
            let v = digits(bytes, at + 2, width, 16).ok_or(UnquoteError::InvalidEscape(pos))?;
            let ch = char::from_u32(v).ok_or(UnquoteError::OutOfRange(pos))?;
            let mut buf = [0; 4];
            out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            Ok(2 + width)
        },
        b'0'..=b'7' => {
            let v = digits(bytes, at + 1, 3, 8).ok_or(UnquoteError::InvalidEscape(pos))?;
            out.push(u8::try_from(v).map_err(|_| UnquoteError::OutOfRange(pos))?);
            Ok(4)
        },
        _ => Err(UnquoteError::InvalidEscape(pos)),
    }
}

/// Parse exactly `count` digits of `radix` starting at `start`
fn digits(bytes: &[u8], start: usize, count: usize, radix: u32) -> Option<u32> {
    bytes
        .get(start..start + count)?
        .iter()
        .try_fold(0u32, |acc, &b| Some(acc * radix + char::from(b).to_digit(radix)?))
}
