//! Character classes and single-character parsers.
//!
//! The predicates take `&char` so they can be handed straight to
//! [`satisfies`]. Classes are ASCII only.

use super::combinators::{BoxedParser, satisfies};
use super::state::Input;

pub fn is_digit(c: &char) -> bool {
    c.is_ascii_digit()
}

pub fn is_lower(c: &char) -> bool {
    c.is_ascii_lowercase()
}

pub fn is_upper(c: &char) -> bool {
    c.is_ascii_uppercase()
}

pub fn is_alpha(c: &char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_alphanumeric(c: &char) -> bool {
    c.is_ascii_alphanumeric()
}

/// ASCII whitespace, including the vertical tab
pub fn is_whitespace(c: &char) -> bool {
    c.is_ascii_whitespace() || *c == '\x0B'
}

pub fn digit<'a, I: Input<Symbol = char> + 'a>() -> BoxedParser<'a, I, char> {
    satisfies(is_digit)
}

pub fn lower<'a, I: Input<Symbol = char> + 'a>() -> BoxedParser<'a, I, char> {
    satisfies(is_lower)
}

pub fn upper<'a, I: Input<Symbol = char> + 'a>() -> BoxedParser<'a, I, char> {
    satisfies(is_upper)
}

pub fn letter<'a, I: Input<Symbol = char> + 'a>() -> BoxedParser<'a, I, char> {
    satisfies(is_alpha)
}

pub fn alphanum<'a, I: Input<Symbol = char> + 'a>() -> BoxedParser<'a, I, char> {
    satisfies(is_alphanumeric)
}

pub fn whitespace<'a, I: Input<Symbol = char> + 'a>() -> BoxedParser<'a, I, char> {
    satisfies(is_whitespace)
}

/// Exactly the character `expected`
pub fn character<'a, I: Input<Symbol = char> + 'a>(expected: char) -> BoxedParser<'a, I, char> {
    satisfies(move |c: &char| *c == expected)
}
