//! CSS simple-selector parsing and matching for the Quokka engine.
//!
//! # Scope
//!
//! This crate implements:
//! - **Scanner primitives** — character classification and CSS escape
//!   decoding (`\000026`, `\26 `, `\U+000026`, `\U+0026 ` forms) shared by
//!   every selector parser
//! - **Simple selectors** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Universal (`*`), type (`div`), id (`#main`), class (`.item`), and
//!     attribute (`[attr op val]`) selectors
//!   - All attribute operators: presence, `=`, `~=`, `|=`, `^=`, `$=`, `*=`
//! - **Matching** — a parsed [`Selector`] is an immutable predicate over a
//!   single [`quokka_dom::Node`]; matching is infallible and thread-safe
//!
//! # Not Implemented
//!
//! - Selector lists and combinators (descendant, child, sibling)
//! - Compound selectors
//! - Specificity
//! - Pseudo-classes and pseudo-elements
//! - Namespace selectors

/// Parse-time error types.
pub mod error;
/// Simple-selector parsing and matching.
pub mod selector;

// Re-exports for convenience
pub use error::SelectorError;
pub use selector::{AttributeOperator, Selector};
