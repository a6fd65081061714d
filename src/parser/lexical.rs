//! Whitespace-tolerant lexical parsers built from the lower layers.

use super::chars::{alphanum, digit, is_whitespace, lower};
use super::combinators::{BoxedParser, failure, literal, satisfies, success};
use super::repetition::{many, many_str, many1_str};
use super::sequence::seq2_str;
use super::state::Input;

/// Skip a run of whitespace; always succeeds
pub fn space<'a, I: Input<Symbol = char> + 'a>() -> BoxedParser<'a, I, ()> {
    space_with(is_whitespace)
}

/// Skip a run of symbols matching `is_space`; always succeeds
pub fn space_with<'a, I, F>(is_space: F) -> BoxedParser<'a, I, ()>
where
    I: Input + 'a,
    F: Fn(&I::Symbol) -> bool + 'a,
{
    ignore(many(satisfies(is_space)))
}

/// `around`, then `parser`, then `around` again; keeps `parser`'s value
pub fn between<'a, I, T, U>(
    parser: BoxedParser<'a, I, T>,
    around: BoxedParser<'a, I, U>,
) -> BoxedParser<'a, I, T>
where
    I: Input + 'a,
    T: 'a,
    U: 'a,
{
    between_left_right(around.clone(), parser, around)
}

/// `left`, then `parser`, then `right`; keeps `parser`'s value
pub fn between_left_right<'a, I, L, T, R>(
    left: BoxedParser<'a, I, L>,
    parser: BoxedParser<'a, I, T>,
    right: BoxedParser<'a, I, R>,
) -> BoxedParser<'a, I, T>
where
    I: Input + 'a,
    L: 'a,
    T: 'a,
    R: 'a,
{
    left * parser - right
}

/// `parser` with surrounding whitespace skipped
pub fn token<'a, I, T>(parser: BoxedParser<'a, I, T>) -> BoxedParser<'a, I, T>
where
    I: Input<Symbol = char> + 'a,
    T: 'a,
{
    between(parser, space())
}

/// ident := lower alphanum*
pub fn ident<'a, I: Input<Symbol = char> + 'a>() -> BoxedParser<'a, I, String> {
    seq2_str(lower(), many_str(alphanum()))
}

/// nat := digit+
///
/// A run of digits too large for `u64` does not match.
pub fn nat<'a, I: Input<Symbol = char> + 'a>() -> BoxedParser<'a, I, u64> {
    many1_str(digit()).flat_map(|digits| match digits.parse::<u64>() {
        Ok(value) => success(value),
        Err(_) => failure(),
    })
}

pub fn identifier<'a, I: Input<Symbol = char> + 'a>() -> BoxedParser<'a, I, String> {
    token(ident())
}

pub fn natural<'a, I: Input<Symbol = char> + 'a>() -> BoxedParser<'a, I, u64> {
    token(nat())
}

/// The exact text `expected`, surrounded by optional whitespace
pub fn symbol<'a, I: Input<Symbol = char> + 'a>(expected: &str) -> BoxedParser<'a, I, String> {
    let text = expected.to_owned();
    token(literal(expected.chars())).map(move |_| text.clone())
}

/// Run `parser` and throw its value away
pub fn ignore<'a, I, T>(parser: BoxedParser<'a, I, T>) -> BoxedParser<'a, I, ()>
where
    I: Input + 'a,
    T: 'a,
{
    parser.ignore()
}
