//! Scanner primitives shared by every selector parser.
//!
//! A [`Cursor`] is created per parse call and discarded afterwards; it is
//! never shared across parses or threads. All selector-specific parsers build
//! on the same character classes and the same escape decoder so the escape
//! grammar cannot drift between selector kinds.

use crate::error::SelectorError;

/// Escapes reference code points up to 21 bits; anything larger is rejected.
const MAX_ESCAPE_CODE_POINT: u32 = 1 << 21;

/// Scan state over a selector source string.
///
/// Owns the source and a current position that only ever moves forward
/// within one parse call.
#[derive(Debug)]
pub struct Cursor {
    /// The input string being scanned
    input: Vec<char>,
    /// Current position in the input
    position: usize,
}

impl Cursor {
    /// Create a cursor positioned at the start of `input`.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Peek at the next character without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    /// Peek at a character at an offset from the current position.
    #[must_use]
    pub fn peek_at(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    /// Consume and return the next character.
    pub fn consume(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.position += 1;
        }
        c
    }

    /// Advance the position by `n` characters, clamped to the end of input.
    pub fn advance(&mut self, n: usize) {
        self.position = (self.position + n).min(self.input.len());
    }

    /// Check whether `needle` occurs anywhere at or after the current position.
    #[must_use]
    pub fn contains_ahead(&self, needle: char) -> bool {
        self.input[self.position..].contains(&needle)
    }
}

/// Check if a character is valid in a tag name: ASCII letters and digits,
/// per [HTML § syntax-tag-name](https://html.spec.whatwg.org/dev/syntax.html#syntax-tag-name).
#[must_use]
pub const fn is_valid_tag_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Check if a character is valid in a selector identifier: tag-name
/// characters plus `_`, `-`, and any non-ASCII code point, per
/// [CSS 2 § 4.1.3](https://www.w3.org/TR/CSS2/syndata.html#characters).
#[must_use]
pub const fn is_valid_identifier_char(c: char) -> bool {
    is_valid_tag_name_char(c) || c == '_' || c == '-' || !c.is_ascii()
}

/// Check if a character is a hexadecimal digit.
#[must_use]
pub const fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Decode a backslash escape at the cursor position, per
/// [CSS Syntax § 4.3.7](https://www.w3.org/TR/css-syntax-3/#consume-escaped-code-point)
/// with a `U+`-prefixed code-point form on top.
///
/// Supported forms: `\000026`, `\26 ` (short form closed by a single space,
/// which is consumed and not re-emitted), `\U+000026`, and `\U+0026 `.
///
/// Fewer than six hex digits not closed by a space are passed through as
/// literal text rather than decoded. Decoded code points that are surrogates
/// or beyond U+10FFFF become U+FFFD REPLACEMENT CHARACTER.
///
/// # Errors
///
/// [`SelectorError::InvalidEscape`] if the cursor is not at a backslash, if
/// the digit span is empty where a numeric decode is required, or if the
/// code point exceeds the 21-bit bound.
pub fn decode_escape(cursor: &mut Cursor) -> Result<String, SelectorError> {
    match cursor.peek() {
        Some('\\') => cursor.advance(1),
        Some(c) => return Err(SelectorError::InvalidEscape(c.to_string())),
        None => return Err(SelectorError::InvalidEscape(String::new())),
    }

    // "\U+0026" form: skip the code-point marker before scanning digits
    if cursor.peek() == Some('U') && cursor.peek_at(1) == Some('+') {
        cursor.advance(2);
    }

    let mut digits = String::new();
    while digits.len() < 6 {
        match cursor.peek() {
            Some(c) if is_hex_digit(c) => {
                digits.push(c);
                cursor.advance(1);
            }
            _ => break,
        }
    }

    // Partial/unterminated escape: fewer than six digits not closed by a
    // space are returned as a literal substring without numeric decoding.
    if digits.len() < 6 && cursor.peek().is_some_and(|term| term != ' ') {
        return Ok(digits);
    }

    if digits.is_empty() {
        return Err(SelectorError::InvalidEscape(digits));
    }

    let code_point = u32::from_str_radix(&digits, 16)
        .ok()
        .filter(|v| *v < MAX_ESCAPE_CODE_POINT)
        .ok_or_else(|| SelectorError::InvalidEscape(digits.clone()))?;

    // A short escape's terminating space belongs to the escape token
    if digits.len() < 6 && cursor.peek() == Some(' ') {
        cursor.advance(1);
    }

    Ok(char::from_u32(code_point)
        .unwrap_or('\u{FFFD}')
        .to_string())
}
