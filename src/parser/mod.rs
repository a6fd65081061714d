mod chars;
mod combinators;
mod lexical;
mod repetition;
mod sequence;
mod state;

pub use chars::*;
pub use combinators::*;
pub use lexical::*;
pub use repetition::*;
pub use sequence::*;
pub use state::*;

use log::trace;

use crate::error::ParseError;

/// Run `parser` on `input`
pub fn parse<I: Input, T, P: Parser<I, T>>(parser: &P, input: I) -> ParseResult<I, T> {
    trace!("parse: input measure {}", input.measure());
    let result = parser.parse(input);
    match &result {
        Some((_, rest)) => trace!("parse: matched, remaining measure {}", rest.measure()),
        None => trace!("parse: no match"),
    }
    result
}

/// Run `parser` on `input` and require it to consume everything
pub fn parse_complete<I: Input, T, P: Parser<I, T>>(
    parser: &P,
    input: I,
) -> Result<T, ParseError> {
    match parse(parser, input) {
        Some((value, rest)) if rest.is_empty() => Ok(value),
        Some((_, rest)) => Err(ParseError::TrailingInput {
            remaining: rest.measure(),
        }),
        None => Err(ParseError::NoMatch),
    }
}
