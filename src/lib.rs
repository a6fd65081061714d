//! # Parsifal - Monadic Parser Combinators
//!
//! Parsifal is a small parser-combinator engine. Grammars are assembled from a
//! handful of primitive parsers using monadic sequencing, mapping and ordered
//! alternation, and then run as ordinary recursive-descent parsers.
//!
//! ## Architecture Overview
//!
//! The engine is layered, each layer built only from the ones below it:
//!
//! 1. **State** (`parser::state`) - the [`Input`](parser::Input) abstraction,
//!    [`ParseResult`](parser::ParseResult) and the [`Parser`](parser::Parser) trait
//! 2. **Primitives** - `success`, `failure`, `item` and `literal`
//! 3. **Core combinators** - `flat_map`, `map`, `satisfies`, `choice` and the
//!    operator forms on [`BoxedParser`](parser::BoxedParser)
//! 4. **Sequencing** - `seq2`, `seq`, `seq2_str`, `seq_str`, `pair`
//! 5. **Repetition** - `many`, `many1` and their string forms
//! 6. **Lexical helpers** - character classes, `space`, `token`, `identifier`,
//!    `natural`, `symbol`, `ignore`
//!
//! ```text
//! primitives → core combinators → sequencing / repetition → lexical helpers
//! ```
//!
//! ## Key Design Decisions
//!
//! ### Results are `Option`s
//! A parse either succeeds with a value and the unconsumed remainder, or it
//! fails with no further information. Failure propagates through `?` and
//! [`Option::and_then`]; the only recovery point is alternation, which retries
//! the next alternative on the original input.
//!
//! ### First match wins
//! `choice` and `|` are ordered. Once an alternative succeeds the later ones
//! are never tried, even if they would have consumed more input.
//!
//! ### Static value shapes
//! `seq` always yields a `Vec` with one element per parser, the `*_str`
//! variants yield a `String`, and `pair`/`+` yield tuples. Nothing is flattened
//! behind the caller's back.
//!
//! ### Bounded repetition
//! `many` stops as soon as an application succeeds without consuming input,
//! so it terminates even for parsers that can match the empty string.
//!
//! ## Module Structure
//!
//! - [`parser`] - the combinator engine
//! - [`error`] - the error type for whole-input parsing
//!
//! ## Example
//!
//! ```
//! use parsifal::parser::{natural, parse, symbol, BoxedParser, Parser};
//!
//! // sum := natural ("+" natural)*
//! let term = symbol("+") * natural();
//! let sum: BoxedParser<&str, u64> = natural()
//!     .then(parsifal::parser::many(term))
//!     .map(|(first, rest)| first + rest.iter().sum::<u64>());
//!
//! assert_eq!(parse(&sum, " 1 + 2 + 39 "), Some((42, "")));
//! assert_eq!(sum.parse("x"), None);
//! ```

pub mod error;
pub mod parser;

pub use error::ParseError;
