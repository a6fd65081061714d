//! Errors reported by [`parse_complete`](crate::parser::parse_complete).
//!
//! Inside the engine a failed parse is just `None`. This type only exists at
//! the boundary where a caller wants the whole input to be consumed.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The parser did not match the input.
    #[error("input did not match")]
    NoMatch,
    /// The parser matched a prefix but left input behind.
    ///
    /// `remaining` is the [`measure`](crate::parser::Input::measure) of the
    /// leftover input: bytes for `&str`, elements for slices.
    #[error("unexpected trailing input ({remaining} left)")]
    TrailingInput { remaining: usize },
}
