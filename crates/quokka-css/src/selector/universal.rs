//! [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#universal-selector)
//!
//! "The universal selector is a single asterisk (*) and represents the
//! qualified name of any element type."

use crate::error::SelectorError;
use crate::selector::Selector;
use crate::selector::cursor::Cursor;

/// Parse a universal selector.
///
/// Succeeds only if the input starts with `*`. The resulting selector
/// matches any node; callers combining it with other checks are responsible
/// for node-type filtering.
///
/// # Errors
///
/// [`SelectorError::UnexpectedToken`] if the input does not start with `*`.
pub fn parse(input: &str) -> Result<Selector, SelectorError> {
    let cursor = Cursor::new(input);
    match cursor.peek() {
        Some('*') => Ok(Selector::Universal),
        found => Err(SelectorError::unexpected("universal selector (*)", found)),
    }
}
