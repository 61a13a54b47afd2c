//! [§ 5.1 Type (tag name) selector](https://www.w3.org/TR/selectors-4/#type-selectors)
//!
//! "A type selector is the name of a document language element type, and
//! represents an instance of that element type in the document tree."

use crate::error::SelectorError;
use crate::selector::Selector;
use crate::selector::cursor::{Cursor, decode_escape, is_valid_tag_name_char};

/// Parse a tag selector such as `section` or `s\65 ction`.
///
/// Consumes tag-name characters and escape sequences; skips plain spaces,
/// newlines, tabs, and CR-LF pairs. The accumulated name is lowercased, so
/// `SECTION`, `Section`, and `section` all produce the same selector.
///
/// # Errors
///
/// [`SelectorError::UnexpectedToken`] if the input does not start with a tag
/// name character or a backslash, or contains a character that cannot appear
/// in a tag selector. [`SelectorError::InvalidEscape`] on a malformed escape.
pub fn parse(input: &str) -> Result<Selector, SelectorError> {
    let mut cursor = Cursor::new(input);
    match cursor.peek() {
        Some(c) if is_valid_tag_name_char(c) || c == '\\' => {}
        found => return Err(SelectorError::unexpected("tag selector (name)", found)),
    }

    let mut name = String::new();
    while let Some(c) = cursor.peek() {
        match c {
            c if is_valid_tag_name_char(c) => {
                name.push(c);
                cursor.advance(1);
            }
            '\\' => name.push_str(&decode_escape(&mut cursor)?),
            '\r' => {
                // CR alone advances once; CR-LF advances past both
                cursor.advance(1);
                if cursor.peek() == Some('\n') {
                    cursor.advance(1);
                }
            }
            ' ' | '\n' | '\t' => cursor.advance(1),
            other => {
                return Err(SelectorError::unexpected(
                    "tag name character",
                    Some(other),
                ));
            }
        }
    }

    Ok(Selector::Tag {
        name: name.to_lowercase(),
    })
}
