//! Sequencing combinators.
//!
//! `seq` folds its parsers left to right, starting from a parser that
//! succeeds with an empty accumulator. Each parser contributes exactly one
//! element, so nesting is never flattened: a `many` inside a `seq` shows up as
//! a single `Vec` element.

use std::fmt::Display;

use super::combinators::{BoxedParser, success};
use super::state::{Input, Parser};

/// Run `first` then `second`, collecting both values in order
pub fn seq2<'a, I, T>(
    first: BoxedParser<'a, I, T>,
    second: BoxedParser<'a, I, T>,
) -> BoxedParser<'a, I, Vec<T>>
where
    I: Input + 'a,
    T: 'a,
{
    seq([first, second])
}

/// Run every parser in order, collecting one value per parser
pub fn seq<'a, I, T, P>(parsers: P) -> BoxedParser<'a, I, Vec<T>>
where
    I: Input + 'a,
    T: 'a,
    P: IntoIterator<Item = BoxedParser<'a, I, T>>,
{
    let empty = BoxedParser::new(|input: I| Some((Vec::new(), input)));
    parsers.into_iter().fold(empty, append)
}

/// Like [`seq2`], concatenating the rendered values into one string
///
/// The two values only need to be `Display`, not of the same type.
pub fn seq2_str<'a, I, A, B>(
    first: BoxedParser<'a, I, A>,
    second: BoxedParser<'a, I, B>,
) -> BoxedParser<'a, I, String>
where
    I: Input + 'a,
    A: Display + 'a,
    B: Display + 'a,
{
    first.then(second).map(|(a, b)| format!("{a}{b}"))
}

/// Like [`seq`], concatenating the rendered values into one string
pub fn seq_str<'a, I, T, P>(parsers: P) -> BoxedParser<'a, I, String>
where
    I: Input + 'a,
    T: Display + 'a,
    P: IntoIterator<Item = BoxedParser<'a, I, T>>,
{
    parsers.into_iter().fold(success(String::new()), concat)
}

/// Run `first` then `second`, pairing values of different types
pub fn pair<'a, I, T, U>(
    first: BoxedParser<'a, I, T>,
    second: BoxedParser<'a, I, U>,
) -> BoxedParser<'a, I, (T, U)>
where
    I: Input + 'a,
    T: 'a,
    U: 'a,
{
    first.then(second)
}

// One fold step of `seq`
fn append<'a, I, T>(
    acc: BoxedParser<'a, I, Vec<T>>,
    next: BoxedParser<'a, I, T>,
) -> BoxedParser<'a, I, Vec<T>>
where
    I: Input + 'a,
    T: 'a,
{
    BoxedParser::new(move |input: I| {
        let (mut values, rest) = acc.parse(input)?;
        let (value, rest) = next.parse(rest)?;
        values.push(value);
        Some((values, rest))
    })
}

// One fold step of `seq_str`
fn concat<'a, I, T>(
    acc: BoxedParser<'a, I, String>,
    next: BoxedParser<'a, I, T>,
) -> BoxedParser<'a, I, String>
where
    I: Input + 'a,
    T: Display + 'a,
{
    BoxedParser::new(move |input: I| {
        let (mut text, rest) = acc.parse(input)?;
        let (value, rest) = next.parse(rest)?;
        text.push_str(&value.to_string());
        Some((text, rest))
    })
}
