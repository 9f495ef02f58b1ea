//! Canonical tag grammar validation
//!
//! A tag is a sequence of `key:"value"` pairs separated by one or more ASCII
//! spaces. The scanner walks the tag once, left to right, and stops at the
//! first error it meets, so the reported error is stable for a given input.
//!
//! ```text
//!            ' '
//!          ┌─────┐
//!          ▼     │
//!     ┌─────────────┐  other   ┌─────────┐   ':'   ┌───────────┐
//! ──▶ │  SkipSpace  │ ───────▶ │ ScanKey │ ──────▶ │ ScanValue │
//!     └─────────────┘          └─────────┘         └───────────┘
//!          ▲  │ end                                      │
//!          │  ▼                                          │
//!          │  Ok                                         │
//!          └─────────────── ' ' or end ──────────────────┘
//! ```

use super::{unquote_double, SyntaxError};

/// Scanner states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Skipping the spaces before a pair
    SkipSpace,
    /// Reading a key that began at the given offset
    ScanKey(usize),
    /// Expecting a double-quoted value right after the colon
    ScanValue,
    /// Whole tag consumed
    Done,
}

/// Single-pass scanner over a tag string
#[derive(Debug)]
struct Scanner<'a> {
    tag: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    const fn new(tag: &'a str) -> Self {
        Self { tag, pos: 0 }
    }

    fn bytes(&self) -> &'a [u8] {
        self.tag.as_bytes()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tag.len()
    }

    fn run(&mut self) -> Result<(), SyntaxError> {
        let mut state = State::SkipSpace;
        while state != State::Done {
            state = match state {
                State::SkipSpace => self.skip_space(),
                State::ScanKey(start) => self.scan_key(start)?,
                State::ScanValue => self.scan_value()?,
                State::Done => State::Done,
            };
        }
        Ok(())
    }

    fn skip_space(&mut self) -> State {
        while !self.at_end() && self.bytes()[self.pos] == b' ' {
            self.pos += 1;
        }
        if self.at_end() {
            State::Done
        } else {
            State::ScanKey(self.pos)
        }
    }

    /// Advance over the key and its colon
    ///
    /// Running off the end without a colon is not an error here; the value
    /// scan that follows reports it.
    fn scan_key(&mut self, start: usize) -> Result<State, SyntaxError> {
        while let Some(ch) = self.tag[self.pos..].chars().next() {
            if ch == ':' {
                if self.pos == start {
                    return Err(SyntaxError::TagSyntax);
                }
                self.pos += 1;
                break;
            }
            if ch == '"' || ch.is_control() {
                return Err(SyntaxError::TagKeySyntax);
            }
            self.pos += ch.len_utf8();
        }
        Ok(State::ScanValue)
    }

    fn scan_value(&mut self) -> Result<State, SyntaxError> {
        let bytes = self.bytes();
        let len = bytes.len();

        // Room for at least an opening and a closing quote
        if self.pos + 2 > len {
            return Err(SyntaxError::TagSyntax);
        }
        if bytes[self.pos] != b'"' {
            return Err(SyntaxError::TagValueSyntax);
        }

        let open = self.pos;
        self.pos += 1;
        while self.pos < len && bytes[self.pos] != b'"' {
            if bytes[self.pos] == b'\\' {
                self.pos += 1;
            }
            self.pos += 1;
        }
        if self.pos >= len {
            return Err(SyntaxError::TagValueSyntax);
        }
        self.pos += 1;

        unquote_double(&self.tag[open..self.pos]).map_err(|_| SyntaxError::TagValueSyntax)?;

        if self.pos < len && bytes[self.pos] != b' ' {
            return Err(SyntaxError::TagSyntax);
        }
        Ok(State::SkipSpace)
    }
}

/// Check that a tag is in canonical `key:"value"` form
///
/// # Examples
///
/// ```
/// use tagcheck::tag::{validate, SyntaxError};
///
/// assert!(validate(r#"json:"name,omitempty" xml:"name""#).is_ok());
/// assert_eq!(validate(r#"json:name"#), Err(SyntaxError::TagValueSyntax));
/// ```
pub fn validate(tag: &str) -> Result<(), SyntaxError> {
    let mut scanner = Scanner::new(tag);
    scanner.run().inspect_err(|err| {
        log::debug!("tag {tag:?} rejected at byte {}: {err}", scanner.pos);
    })
}
