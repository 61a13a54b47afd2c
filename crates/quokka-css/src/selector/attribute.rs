//! [§ 6.5 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-representation)
//!
//! "Attribute selectors allow an element to be selected based on the
//! presence of an attribute or the exact or partial match of an attribute's
//! value."
//!
//! This is the most intricate variant: a key, an optional operator token,
//! and an optional (possibly quoted) value, all inside `[` ... `]`.

use crate::error::SelectorError;
use crate::selector::cursor::{Cursor, decode_escape, is_valid_identifier_char};
use crate::selector::{AttributeOperator, Selector};

/// Parse an attribute selector such as `[width]`, `[title~="es"]`, or
/// `[lang|=en]`.
///
/// Identifier characters and escapes accumulate into the key until an
/// operator token (`=`, `~=`, `|=`, `^=`, `$=`, `*=`) is seen, after which
/// they accumulate into the value. Quoted values are unwrapped with embedded
/// escapes decoded; structural whitespace and the closing `]` are skipped.
/// With no operator the selector tests attribute presence only.
///
/// # Errors
///
/// [`SelectorError::UnexpectedToken`] if the input does not start with `[`.
/// [`SelectorError::MalformedSelector`] if there is no closing `]`, a quoted
/// value is unterminated, or the key is empty.
/// [`SelectorError::MissingOperator`] if a combinator character is not
/// followed by `=`. [`SelectorError::InvalidEscape`] on a malformed escape.
pub fn parse(input: &str) -> Result<Selector, SelectorError> {
    let mut cursor = Cursor::new(input);
    match cursor.peek() {
        Some('[') => cursor.advance(1),
        found => {
            return Err(SelectorError::unexpected(
                "attribute selector ([attr=val])",
                found,
            ));
        }
    }

    // Refuse structurally broken input before scanning anything
    if !cursor.contains_ahead(']') {
        return Err(SelectorError::MalformedSelector(input.to_string()));
    }

    let mut key = String::new();
    let mut op: Option<AttributeOperator> = None;
    let mut value = String::new();
    let mut in_quotes = false;

    while let Some(c) = cursor.peek() {
        if in_quotes {
            match c {
                '"' => {
                    in_quotes = false;
                    cursor.advance(1);
                }
                '\\' => value.push_str(&decode_escape(&mut cursor)?),
                _ => {
                    value.push(c);
                    cursor.advance(1);
                }
            }
            continue;
        }

        match c {
            c if is_valid_identifier_char(c) => {
                if op.is_some() {
                    value.push(c);
                } else {
                    key.push(c);
                }
                cursor.advance(1);
            }
            '=' => {
                op = Some(AttributeOperator::Equals);
                cursor.advance(1);
            }
            '~' | '|' | '^' | '$' | '*' => {
                if cursor.peek_at(1) == Some('=') {
                    op = Some(match c {
                        '~' => AttributeOperator::TokenMatch,
                        '|' => AttributeOperator::DashMatch,
                        '^' => AttributeOperator::PrefixMatch,
                        '$' => AttributeOperator::SuffixMatch,
                        _ => AttributeOperator::SubstringMatch,
                    });
                    cursor.advance(2);
                } else {
                    return Err(SelectorError::MissingOperator(c));
                }
            }
            '"' => {
                in_quotes = true;
                cursor.advance(1);
            }
            '\\' => {
                let decoded = decode_escape(&mut cursor)?;
                if op.is_some() {
                    value.push_str(&decoded);
                } else {
                    key.push_str(&decoded);
                }
            }
            '\r' => {
                cursor.advance(1);
                if cursor.peek() == Some('\n') {
                    cursor.advance(1);
                }
            }
            ' ' | '\n' | '\t' | ']' => cursor.advance(1),
            other => {
                return Err(SelectorError::unexpected(
                    "attribute selector character",
                    Some(other),
                ));
            }
        }
    }

    if in_quotes || key.is_empty() {
        return Err(SelectorError::MalformedSelector(input.to_string()));
    }

    Ok(Selector::Attribute {
        key,
        op: op.unwrap_or(AttributeOperator::Present),
        value,
    })
}

/// Evaluate an operator against a single attribute value.
///
/// All comparisons are slice-safe: a selector value longer than the
/// attribute value is simply a non-match, never an out-of-range access.
pub(crate) fn value_matches(op: AttributeOperator, actual: &str, expected: &str) -> bool {
    match op {
        // Key presence was already established by attribute lookup
        AttributeOperator::Present => true,
        AttributeOperator::Equals => actual == expected,
        AttributeOperator::TokenMatch => actual.split(' ').any(|token| token == expected),
        AttributeOperator::DashMatch => {
            actual == expected
                || actual
                    .strip_prefix(expected)
                    .is_some_and(|rest| rest.starts_with('-'))
        }
        AttributeOperator::PrefixMatch => actual.starts_with(expected),
        AttributeOperator::SuffixMatch => actual.ends_with(expected),
        AttributeOperator::SubstringMatch => actual.contains(expected),
    }
}
