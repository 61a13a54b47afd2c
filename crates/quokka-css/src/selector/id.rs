//! [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
//!
//! "An ID selector is a hash (#, U+0023) immediately followed by the ID
//! value, which is an identifier."

use crate::error::SelectorError;
use crate::selector::Selector;
use crate::selector::cursor::{Cursor, decode_escape, is_valid_identifier_char};

/// Parse an id selector such as `#main` or `#test\69 d`.
///
/// Requires the `#` prefix, then consumes identifier characters (letters,
/// digits, `_`, `-`, non-ASCII) and escape sequences; plain spaces are
/// skipped.
///
/// # Errors
///
/// [`SelectorError::UnexpectedToken`] if the input does not start with `#`
/// or contains a character that cannot appear in an identifier.
/// [`SelectorError::InvalidEscape`] on a malformed escape.
pub fn parse(input: &str) -> Result<Selector, SelectorError> {
    let mut cursor = Cursor::new(input);
    match cursor.peek() {
        Some('#') => cursor.advance(1),
        found => return Err(SelectorError::unexpected("id selector (#id)", found)),
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

    Ok(Selector::Id { value })
}
