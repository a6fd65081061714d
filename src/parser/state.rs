//! Input model, parse results and the `Parser` capability.

/// Outcome of running a parser: the produced value and the unconsumed rest of
/// the input, or `None` when the parser did not match.
pub type ParseResult<I, T> = Option<(T, I)>;

/// An immutable sequence of symbols that parsers consume from the front.
///
/// Parsers never mutate their input; they only ever hand back a suffix of it.
pub trait Input: Clone {
    type Symbol: Clone;

    fn is_empty(&self) -> bool;

    fn first(&self) -> Option<Self::Symbol>;

    /// The input without its first symbol. Empty input stays empty.
    fn drop_first(&self) -> Self;

    /// The first `count` symbols, or all of them if there are fewer.
    fn take(&self, count: usize) -> Self;

    /// The input without its first `count` symbols.
    ///
    /// The combinators step through input one symbol at a time; this is for
    /// hand-written parsers that skip a known-length prefix.
    fn drop(&self, count: usize) -> Self;

    /// Size of the input in some unit that strictly decreases whenever at
    /// least one symbol is consumed.
    fn measure(&self) -> usize;

    /// Splits off the first symbol.
    fn split_first(&self) -> Option<(Self::Symbol, Self)> {
        self.first().map(|symbol| (symbol, self.drop_first()))
    }
}

impl<'a> Input for &'a str {
    type Symbol = char;

    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }

    fn first(&self) -> Option<char> {
        self.chars().next()
    }

    fn drop_first(&self) -> Self {
        let mut chars = self.chars();
        chars.next();
        chars.as_str()
    }

    fn take(&self, count: usize) -> Self {
        &self[..byte_offset(self, count)]
    }

    fn drop(&self, count: usize) -> Self {
        &self[byte_offset(self, count)..]
    }

    fn measure(&self) -> usize {
        self.len()
    }
}

/// Byte offset of the `count`th char, clamped to the end of `s`.
fn byte_offset(s: &str, count: usize) -> usize {
    s.char_indices()
        .nth(count)
        .map_or(s.len(), |(offset, _)| offset)
}

impl<'a, S: Clone> Input for &'a [S] {
    type Symbol = S;

    fn is_empty(&self) -> bool {
        <[S]>::is_empty(self)
    }

    fn first(&self) -> Option<S> {
        <[S]>::first(self).cloned()
    }

    fn drop_first(&self) -> Self {
        self.get(1..).unwrap_or_default()
    }

    fn take(&self, count: usize) -> Self {
        &self[..count.min(self.len())]
    }

    fn drop(&self, count: usize) -> Self {
        &self[count.min(self.len())..]
    }

    fn measure(&self) -> usize {
        self.len()
    }
}

/// Anything that can turn an input into a [`ParseResult`].
pub trait Parser<I, T> {
    fn parse(&self, input: I) -> ParseResult<I, T>;
}

// Allow closures to be parsers
impl<I, T, F: Fn(I) -> ParseResult<I, T>> Parser<I, T> for F {
    fn parse(&self, input: I) -> ParseResult<I, T> {
        self(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_input_steps_over_multibyte_chars() {
        let input = "äbc";
        assert_eq!(Input::first(&input), Some('ä'));
        assert_eq!(input.drop_first(), "bc");
        assert_eq!(Input::take(&input, 2), "äb");
        assert_eq!(Input::drop(&input, 2), "c");
        assert_eq!(Input::drop(&input, 10), "");
        assert!(input.drop_first().measure() < input.measure());
    }

    #[test]
    fn empty_str_input() {
        let input = "";
        assert!(Input::is_empty(&input));
        assert_eq!(Input::first(&input), None);
        assert_eq!(input.drop_first(), "");
        assert_eq!(Input::split_first(&input), None);
    }

    #[test]
    fn slice_input() {
        let data = [1, 2, 3];
        let input: &[i32] = &data;
        assert_eq!(Input::first(&input), Some(1));
        assert_eq!(input.drop_first(), &[2, 3]);
        assert_eq!(Input::take(&input, 5), &[1, 2, 3]);
        assert_eq!(Input::drop(&input, 1), &[2, 3]);
        assert_eq!(Input::split_first(&input), Some((1, &data[1..])));

        let empty: &[i32] = &[];
        assert_eq!(empty.drop_first(), empty);
    }
}
