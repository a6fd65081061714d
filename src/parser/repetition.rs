//! Repetition combinators.

use std::fmt::Display;

use log::trace;

use super::combinators::BoxedParser;
use super::state::{Input, Parser};

/// Parse zero or more occurrences
///
/// Stops at the first failure, at end of input, or at the first application
/// that succeeds without consuming anything. A zero-width match is dropped,
/// which keeps parsers like `many(success(x))` from looping forever.
pub fn many<'a, I, T>(parser: BoxedParser<'a, I, T>) -> BoxedParser<'a, I, Vec<T>>
where
    I: Input + 'a,
    T: 'a,
{
    BoxedParser::new(move |input: I| Some(repeat(&parser, Vec::new(), input)))
}

/// Parse one or more occurrences
pub fn many1<'a, I, T>(parser: BoxedParser<'a, I, T>) -> BoxedParser<'a, I, Vec<T>>
where
    I: Input + 'a,
    T: 'a,
{
    BoxedParser::new(move |input: I| {
        let (first, rest) = parser.parse(input)?;
        Some(repeat(&parser, vec![first], rest))
    })
}

/// [`many`], with the values concatenated into a string
pub fn many_str<'a, I, T>(parser: BoxedParser<'a, I, T>) -> BoxedParser<'a, I, String>
where
    I: Input + 'a,
    T: Display + 'a,
{
    many(parser).map(|values| concat(&values))
}

/// [`many1`], with the values concatenated into a string
pub fn many1_str<'a, I, T>(parser: BoxedParser<'a, I, T>) -> BoxedParser<'a, I, String>
where
    I: Input + 'a,
    T: Display + 'a,
{
    many1(parser).map(|values| concat(&values))
}

fn repeat<I: Input, T>(
    parser: &BoxedParser<'_, I, T>,
    mut results: Vec<T>,
    mut input: I,
) -> (Vec<T>, I) {
    while !input.is_empty() {
        match parser.parse(input.clone()) {
            Some((_, rest)) if rest.measure() >= input.measure() => {
                trace!(
                    "many: stopping on zero-width match after {} items",
                    results.len()
                );
                break;
            }
            Some((item, rest)) => {
                results.push(item);
                input = rest;
            }
            None => break,
        }
    }
    (results, input)
}

fn concat<T: Display>(values: &[T]) -> String {
    values.iter().map(ToString::to_string).collect()
}
