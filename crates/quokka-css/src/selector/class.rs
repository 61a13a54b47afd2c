//! [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
//!
//! "The class selector is given as a full stop (. U+002E) immediately
//! followed by an identifier."

use crate::error::SelectorError;
use crate::selector::Selector;
use crate::selector::cursor::{Cursor, decode_escape, is_valid_identifier_char};

/// Parse a class selector such as `.pretty-list` or `.test\U+0069 d`.
///
/// Requires the `.` prefix, then consumes identifier characters (letters,
/// digits, `_`, `-`, non-ASCII) and escape sequences; plain spaces are
/// skipped.
///
/// # Errors
///
/// [`SelectorError::UnexpectedToken`] if the input does not start with `.`
/// or contains a character that cannot appear in an identifier.
/// [`SelectorError::InvalidEscape`] on a malformed escape.
pub fn parse(input: &str) -> Result<Selector, SelectorError> {
    let mut cursor = Cursor::new(input);
    match cursor.peek() {
        Some('.') => cursor.advance(1),
        found => return Err(SelectorError::unexpected("class selector (.class)", found)),
    }

    let mut value = String::new();
    while let Some(c) = cursor.peek() {
        match c {
            c if is_valid_identifier_char(c) => {
                value.push(c);
                cursor.advance(1);
            }
            '\\' => value.push_str(&decode_escape(&mut cursor)?),
            ' ' => cursor.advance(1),
            other => {
                return Err(SelectorError::unexpected(
                    "identifier character",
                    Some(other),
                ));
            }
        }
    }

    Ok(Selector::Class { value })
}
