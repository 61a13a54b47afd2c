//! Tests for the shared scanner primitives: character classes and the CSS
//! escape decoder, exercised in isolation from the selector parsers.

use quokka_css::error::SelectorError;
use quokka_css::selector::cursor::{
    Cursor, decode_escape, is_hex_digit, is_valid_identifier_char, is_valid_tag_name_char,
};

// ========== character classes ==========

#[test]
fn test_tag_name_chars_are_ascii_alphanumeric() {
    assert!(is_valid_tag_name_char('a'));
    assert!(is_valid_tag_name_char('Z'));
    assert!(is_valid_tag_name_char('7'));
    assert!(!is_valid_tag_name_char('-'));
    assert!(!is_valid_tag_name_char('_'));
    assert!(!is_valid_tag_name_char(' '));
    assert!(!is_valid_tag_name_char('é'));
}

#[test]
fn test_identifier_chars_add_underscore_hyphen_and_non_ascii() {
    assert!(is_valid_identifier_char('a'));
    assert!(is_valid_identifier_char('0'));
    assert!(is_valid_identifier_char('_'));
    assert!(is_valid_identifier_char('-'));
    assert!(is_valid_identifier_char('é'));
    assert!(is_valid_identifier_char('日'));
    assert!(!is_valid_identifier_char('.'));
    assert!(!is_valid_identifier_char('#'));
    assert!(!is_valid_identifier_char(' '));
}

#[test]
fn test_hex_digits() {
    for c in "0123456789abcdefABCDEF".chars() {
        assert!(is_hex_digit(c), "expected '{c}' to be a hex digit");
    }
    assert!(!is_hex_digit('g'));
    assert!(!is_hex_digit('G'));
    assert!(!is_hex_digit(' '));
}

// ========== cursor mechanics ==========

#[test]
fn test_cursor_peek_and_consume() {
    let mut cursor = Cursor::new("ab");
    assert_eq!(cursor.peek(), Some('a'));
    assert_eq!(cursor.peek_at(1), Some('b'));
    assert_eq!(cursor.peek_at(2), None);
    assert_eq!(cursor.consume(), Some('a'));
    assert_eq!(cursor.consume(), Some('b'));
    assert_eq!(cursor.consume(), None);
    assert_eq!(cursor.peek(), None);
}

#[test]
fn test_cursor_advance_clamps_to_end() {
    let mut cursor = Cursor::new("ab");
    cursor.advance(10);
    assert_eq!(cursor.peek(), None);
}

#[test]
fn test_cursor_contains_ahead_only_looks_forward() {
    let mut cursor = Cursor::new("a]b");
    assert!(cursor.contains_ahead(']'));
    cursor.advance(2);
    assert!(!cursor.contains_ahead(']'));
    assert!(cursor.contains_ahead('b'));
}

// ========== escape decoding ==========

#[test]
fn test_decode_six_digit_escape() {
    let mut cursor = Cursor::new("\\000073x");
    assert_eq!(decode_escape(&mut cursor).unwrap(), "s");
    // All six digits consumed, next input character still there
    assert_eq!(cursor.peek(), Some('x'));
}

#[test]
fn test_decode_short_escape_consumes_terminating_space() {
    let mut cursor = Cursor::new("\\73 x");
    assert_eq!(decode_escape(&mut cursor).unwrap(), "s");
    assert_eq!(cursor.peek(), Some('x'));
}

#[test]
fn test_decode_unicode_point_escape() {
    let mut cursor = Cursor::new("\\U+000073x");
    assert_eq!(decode_escape(&mut cursor).unwrap(), "s");
    assert_eq!(cursor.peek(), Some('x'));
}

#[test]
fn test_decode_short_unicode_point_escape_consumes_terminating_space() {
    let mut cursor = Cursor::new("\\U+0073 x");
    assert_eq!(decode_escape(&mut cursor).unwrap(), "s");
    assert_eq!(cursor.peek(), Some('x'));
}

#[test]
fn test_decode_short_escape_at_end_of_input() {
    let mut cursor = Cursor::new("\\69");
    assert_eq!(decode_escape(&mut cursor).unwrap(), "i");
    assert_eq!(cursor.peek(), None);
}

#[test]
fn test_six_digit_escape_does_not_eat_following_space() {
    let mut cursor = Cursor::new("\\000073 x");
    assert_eq!(decode_escape(&mut cursor).unwrap(), "s");
    assert_eq!(cursor.peek(), Some(' '));
}

#[test]
fn test_partial_escape_falls_back_to_literal_digits() {
    // Fewer than six hex digits closed by a non-space character: the digits
    // pass through as literal text, undecoded
    let mut cursor = Cursor::new("\\7gx");
    assert_eq!(decode_escape(&mut cursor).unwrap(), "7");
    assert_eq!(cursor.peek(), Some('g'));
}

#[test]
fn test_partial_escape_with_no_digits_yields_empty_literal() {
    let mut cursor = Cursor::new("\\zx");
    assert_eq!(decode_escape(&mut cursor).unwrap(), "");
    assert_eq!(cursor.peek(), Some('z'));
}

#[test]
fn test_escape_with_empty_digit_span_and_space_terminator_fails() {
    let mut cursor = Cursor::new("\\ x");
    assert!(matches!(
        decode_escape(&mut cursor),
        Err(SelectorError::InvalidEscape(_))
    ));
}

#[test]
fn test_escape_not_at_backslash_fails() {
    let mut cursor = Cursor::new("s");
    assert_eq!(
        decode_escape(&mut cursor),
        Err(SelectorError::InvalidEscape("s".to_string()))
    );
}

#[test]
fn test_escape_past_21_bit_bound_fails() {
    // 0xFFFFFF does not fit in 21 bits
    let mut cursor = Cursor::new("\\FFFFFF");
    assert_eq!(
        decode_escape(&mut cursor),
        Err(SelectorError::InvalidEscape("FFFFFF".to_string()))
    );
}

#[test]
fn test_escape_beyond_unicode_range_becomes_replacement_character() {
    // 0x1FFFFF fits in 21 bits but is not a valid scalar value
    let mut cursor = Cursor::new("\\1FFFFF");
    assert_eq!(decode_escape(&mut cursor).unwrap(), "\u{FFFD}");
}

#[test]
fn test_surrogate_escape_becomes_replacement_character() {
    let mut cursor = Cursor::new("\\00D800");
    assert_eq!(decode_escape(&mut cursor).unwrap(), "\u{FFFD}");
}
