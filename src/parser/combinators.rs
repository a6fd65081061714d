use std::ops::{Add, BitOr, Mul, Shr, Sub};
use std::rc::Rc;

use super::state::{Input, ParseResult, Parser};

type ParserFn<'a, I, T> = Rc<dyn Fn(I) -> ParseResult<I, T> + 'a>;

// === Boxed Parser for type erasure ===

pub struct BoxedParser<'a, I, T> {
    parser: ParserFn<'a, I, T>,
}

impl<I, T> Clone for BoxedParser<'_, I, T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Rc::clone(&self.parser),
        }
    }
}

impl<'a, I: 'a, T: 'a> BoxedParser<'a, I, T> {
    pub fn new<P: Parser<I, T> + 'a>(parser: P) -> Self {
        BoxedParser {
            parser: Rc::new(move |input| parser.parse(input)),
        }
    }
}

impl<I, T> Parser<I, T> for BoxedParser<'_, I, T> {
    fn parse(&self, input: I) -> ParseResult<I, T> {
        (self.parser)(input)
    }
}

impl<I, T> std::fmt::Debug for BoxedParser<'_, I, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BoxedParser")
    }
}

// === Combinators as methods ===

impl<'a, I: Input + 'a, T: 'a> BoxedParser<'a, I, T> {
    /// Bind: parse self, then run the parser `f` builds from the value
    pub fn flat_map<U: 'a, F>(self, f: F) -> BoxedParser<'a, I, U>
    where
        F: Fn(T) -> BoxedParser<'a, I, U> + 'a,
    {
        BoxedParser::new(move |input: I| {
            let (value, rest) = self.parse(input)?;
            f(value).parse(rest)
        })
    }

    /// Map: transform result
    pub fn map<U: 'a, F: Fn(T) -> U + 'a>(self, f: F) -> BoxedParser<'a, I, U> {
        BoxedParser::new(move |input: I| self.parse(input).map(|(value, rest)| (f(value), rest)))
    }

    /// Choice: try self, if fails try other on the same input
    pub fn or(self, other: BoxedParser<'a, I, T>) -> BoxedParser<'a, I, T> {
        BoxedParser::new(move |input: I| self.parse(input.clone()).or_else(|| other.parse(input)))
    }

    /// Sequence: parse self then other, return (T, U)
    pub fn then<U: 'a>(self, other: BoxedParser<'a, I, U>) -> BoxedParser<'a, I, (T, U)> {
        BoxedParser::new(move |input: I| {
            let (a, rest) = self.parse(input)?;
            let (b, rest) = other.parse(rest)?;
            Some(((a, b), rest))
        })
    }

    /// Keep left: parse self then other, discard other's result
    pub fn skip<U: 'a>(self, other: BoxedParser<'a, I, U>) -> BoxedParser<'a, I, T> {
        BoxedParser::new(move |input: I| {
            let (a, rest) = self.parse(input)?;
            let (_, rest) = other.parse(rest)?;
            Some((a, rest))
        })
    }

    /// Keep right: parse self then other, discard self's result
    pub fn skip_left<U: 'a>(self, other: BoxedParser<'a, I, U>) -> BoxedParser<'a, I, U> {
        BoxedParser::new(move |input: I| {
            let (_, rest) = self.parse(input)?;
            other.parse(rest)
        })
    }

    /// Parse self but produce `()`
    pub fn ignore(self) -> BoxedParser<'a, I, ()> {
        self.map(|_| ())
    }
}

// === Operator Overloading ===

/// `+` for sequence: A + B -> (A, B)
impl<'a, I: Input + 'a, T: 'a, U: 'a> Add<BoxedParser<'a, I, U>> for BoxedParser<'a, I, T> {
    type Output = BoxedParser<'a, I, (T, U)>;

    fn add(self, rhs: BoxedParser<'a, I, U>) -> Self::Output {
        self.then(rhs)
    }
}

/// `-` for keep left: A - B -> A (parse B, discard result)
impl<'a, I: Input + 'a, T: 'a, U: 'a> Sub<BoxedParser<'a, I, U>> for BoxedParser<'a, I, T> {
    type Output = BoxedParser<'a, I, T>;

    fn sub(self, rhs: BoxedParser<'a, I, U>) -> Self::Output {
        self.skip(rhs)
    }
}

/// `*` for keep right: A * B -> B (parse A, discard result)
impl<'a, I: Input + 'a, T: 'a, U: 'a> Mul<BoxedParser<'a, I, U>> for BoxedParser<'a, I, T> {
    type Output = BoxedParser<'a, I, U>;

    fn mul(self, rhs: BoxedParser<'a, I, U>) -> Self::Output {
        self.skip_left(rhs)
    }
}

/// `|` for choice: A | B -> A or B
impl<'a, I: Input + 'a, T: 'a> BitOr<BoxedParser<'a, I, T>> for BoxedParser<'a, I, T> {
    type Output = BoxedParser<'a, I, T>;

    fn bitor(self, rhs: BoxedParser<'a, I, T>) -> Self::Output {
        self.or(rhs)
    }
}

/// `>>` for map: A >> fn -> B
impl<'a, I: Input + 'a, T: 'a, U: 'a, F: Fn(T) -> U + 'a> Shr<F> for BoxedParser<'a, I, T> {
    type Output = BoxedParser<'a, I, U>;

    fn shr(self, f: F) -> Self::Output {
        self.map(f)
    }
}

// === Primitive Parsers ===

/// Always succeeds with `value`, consuming nothing
pub fn success<'a, I: Input + 'a, T: Clone + 'a>(value: T) -> BoxedParser<'a, I, T> {
    BoxedParser::new(move |input: I| Some((value.clone(), input)))
}

/// Never succeeds
pub fn failure<'a, I: Input + 'a, T: 'a>() -> BoxedParser<'a, I, T> {
    BoxedParser::new(|_: I| None)
}

/// Consume exactly one symbol
pub fn item<'a, I: Input + 'a>() -> BoxedParser<'a, I, I::Symbol> {
    BoxedParser::new(|input: I| input.split_first())
}

/// Match the exact symbol sequence `expected`, producing the consumed prefix
pub fn literal<'a, I, E>(expected: E) -> BoxedParser<'a, I, I>
where
    I: Input + 'a,
    I::Symbol: PartialEq,
    E: IntoIterator<Item = I::Symbol>,
{
    let expected: Vec<I::Symbol> = expected.into_iter().collect();
    BoxedParser::new(move |input: I| {
        let mut rest = input.clone();
        for symbol in &expected {
            let (found, next) = rest.split_first()?;
            if found != *symbol {
                return None;
            }
            rest = next;
        }
        Some((input.take(expected.len()), rest))
    })
}

/// Free-standing form of [`BoxedParser::flat_map`]
pub fn flat_map<'a, I, T, U, F>(parser: BoxedParser<'a, I, T>, f: F) -> BoxedParser<'a, I, U>
where
    I: Input + 'a,
    T: 'a,
    U: 'a,
    F: Fn(T) -> BoxedParser<'a, I, U> + 'a,
{
    parser.flat_map(f)
}

/// Free-standing form of [`BoxedParser::map`]
pub fn map<'a, I, T, U, F>(parser: BoxedParser<'a, I, T>, f: F) -> BoxedParser<'a, I, U>
where
    I: Input + 'a,
    T: 'a,
    U: 'a,
    F: Fn(T) -> U + 'a,
{
    parser.map(f)
}

/// Consume one symbol if it satisfies `predicate`
pub fn satisfies<'a, I, F>(predicate: F) -> BoxedParser<'a, I, I::Symbol>
where
    I: Input + 'a,
    F: Fn(&I::Symbol) -> bool + 'a,
{
    item().flat_map(move |symbol: I::Symbol| {
        if predicate(&symbol) {
            success(symbol)
        } else {
            failure()
        }
    })
}

/// Ordered alternation: the first parser that matches the original input wins
pub fn choice<'a, I, T, P>(parsers: P) -> BoxedParser<'a, I, T>
where
    I: Input + 'a,
    T: 'a,
    P: IntoIterator<Item = BoxedParser<'a, I, T>>,
{
    let parsers: Vec<BoxedParser<'a, I, T>> = parsers.into_iter().collect();
    BoxedParser::new(move |input: I| {
        parsers
            .iter()
            .find_map(|parser| parser.parse(input.clone()))
    })
}

/// Defer building a parser until it runs, for self-referential grammars
pub fn lazy<'a, I, T, F>(build: F) -> BoxedParser<'a, I, T>
where
    I: Input + 'a,
    T: 'a,
    F: Fn() -> BoxedParser<'a, I, T> + 'a,
{
    BoxedParser::new(move |input: I| build().parse(input))
}
