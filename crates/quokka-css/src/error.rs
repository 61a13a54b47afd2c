//! Parse-time errors for selector parsing.
//!
//! All errors are terminal for the parse call that raised them; there is no
//! partial-result recovery. Matching never errors — an absent attribute or a
//! non-element node simply fails to match.

use thiserror::Error;

/// Errors raised while parsing a simple selector.
///
/// Each variant carries the offending character or substring so callers can
/// surface the message verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// Input does not begin with the sigil or character the parser expected.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        /// Description of what the parser was looking for.
        expected: &'static str,
        /// The offending character, or "end of input".
        found: String,
    },

    /// An attribute selector that is structurally broken: no closing `]`,
    /// an unterminated quoted value, or an empty attribute key.
    #[error("malformed attribute selector '{0}'")]
    MalformedSelector(String),

    /// A combinator character (`~`, `|`, `^`, `$`, `*`) not followed by `=`.
    #[error("expected operation for attribute selector ([~,|,^,$,*]=), found '{0}'")]
    MissingOperator(char),

    /// A malformed escape sequence: empty digit span with a space terminator,
    /// or a code point past the 21-bit bound.
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(String),
}

impl SelectorError {
    /// Build an [`SelectorError::UnexpectedToken`] from an optional lookahead
    /// character, rendering `None` as "end of input".
    pub(crate) fn unexpected(expected: &'static str, found: Option<char>) -> Self {
        Self::UnexpectedToken {
            expected,
            found: found.map_or_else(|| "end of input".to_string(), |c| format!("'{c}'")),
        }
    }
}
