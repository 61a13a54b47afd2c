//! CSS simple-selector parsing and matching.
//!
//! This module implements the simple-selector subset of
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/): type, id, class,
//! attribute, and universal selectors, with no combinators or selector lists.
//!
//! Data flows one way: selector text → parser → [`Selector`] →
//! [`Selector::matches`] → boolean. Parsers never consult the tree; matchers
//! never re-parse text.

use quokka_dom::{ElementData, Node, NodeType};

use crate::error::SelectorError;

pub mod attribute;
pub mod class;
pub mod cursor;
pub mod id;
pub mod tag;
pub mod universal;

/// [§ 6.5 Attribute presence and value selectors](https://www.w3.org/TR/selectors-4/#attribute-representation)
///
/// The comparison mode governing how an attribute's value is compared to the
/// selector's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeOperator {
    /// `[attr]` — no operator token; the attribute merely has to exist.
    Present,
    /// `[attr=val]` — exact whole-value equality.
    Equals,
    /// `[attr~=val]` — membership in the space-separated token list.
    TokenMatch,
    /// `[attr|=val]` — exact value, or `val` followed immediately by `-`.
    DashMatch,
    /// `[attr^=val]` — value begins with `val`.
    PrefixMatch,
    /// `[attr$=val]` — value ends with `val`.
    SuffixMatch,
    /// `[attr*=val]` — value contains `val` anywhere.
    SubstringMatch,
}

/// A parsed simple selector, immutable once constructed.
///
/// [§ 4.1 Structure of a Selector](https://www.w3.org/TR/selectors-4/#structure)
/// "A simple selector is a single condition on an element."
///
/// The set of simple-selector kinds supported here is fixed by the CSS
/// grammar subset, so a closed sum type with a single [`Selector::matches`]
/// dispatch replaces an open predicate-interface hierarchy. All string fields
/// hold fully escape-resolved text; no raw backslash sequences survive
/// parsing. A `Selector` is plain owned data and safe to match concurrently
/// from multiple threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#universal-selector)
    /// `*` — matches any node.
    Universal,

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// A tag name, case-normalized to lowercase at parse time.
    Tag {
        /// The lowercased tag name.
        name: String,
    },

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// `#value` — matches elements whose `id` attribute equals `value`.
    Id {
        /// The identifier to compare against the `id` attribute.
        value: String,
    },

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// `.value` — matches elements whose `class` attribute equals `value`.
    ///
    /// Comparison is against the whole attribute value; token-set matching
    /// of space-separated class lists is not implemented.
    Class {
        /// The class name to compare against the `class` attribute.
        value: String,
    },

    /// [§ 6.5 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-representation)
    /// `[key op value]` — matches elements with an attribute `key` whose
    /// value satisfies `op` against `value`.
    Attribute {
        /// The attribute name; never empty.
        key: String,
        /// The comparison mode.
        op: AttributeOperator,
        /// The comparison value; empty only for [`AttributeOperator::Present`].
        value: String,
    },
}

impl Selector {
    /// Parse a selector fragment, dispatching on its leading sigil:
    /// `*` universal, `#` id, `.` class, `[` attribute, anything else a tag
    /// selector.
    ///
    /// # Errors
    ///
    /// Propagates the variant parser's [`SelectorError`] verbatim; a failed
    /// parse yields no usable selector.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        match input.chars().next() {
            Some('*') => universal::parse(input),
            Some('#') => id::parse(input),
            Some('.') => class::parse(input),
            Some('[') => attribute::parse(input),
            _ => tag::parse(input),
        }
    }

    /// Evaluate this selector against a single node.
    ///
    /// Matching never errors and never mutates: a non-element node or an
    /// absent attribute simply yields `false` (except for the universal
    /// selector, which matches any node).
    #[must_use]
    pub fn matches(&self, node: &Node) -> bool {
        match self {
            Self::Universal => true,
            Self::Tag { name } => {
                as_element(node).is_some_and(|data| data.tag_name.eq_ignore_ascii_case(name))
            }
            Self::Id { value } => {
                as_element(node).is_some_and(|data| data.attr("id") == Some(value.as_str()))
            }
            Self::Class { value } => {
                as_element(node).is_some_and(|data| data.attr("class") == Some(value.as_str()))
            }
            Self::Attribute { key, op, value } => as_element(node)
                .and_then(|data| data.attr(key))
                .is_some_and(|actual| attribute::value_matches(*op, actual, value)),
        }
    }
}

/// View a node as an element, if it is one.
fn as_element(node: &Node) -> Option<&ElementData> {
    match &node.node_type {
        NodeType::Element(data) => Some(data),
        _ => None,
    }
}
