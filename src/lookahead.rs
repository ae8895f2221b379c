use crate::cursor::TextCursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser combinator that runs a parser and rewinds on success
///
/// A consumed success becomes an empty success at the original position with
/// a fresh message; its diagnostics are dropped. Empty successes and failures
/// pass through as they are, so a failure that consumed input still counts as
/// consumed. Wrap the inner parser in [`crate::attempt::attempt`] to rewind
/// failures too.
pub struct Lookahead<P> {
    parser: P,
}

impl<P> Lookahead<P> {
    pub fn new(parser: P) -> Self {
        Lookahead { parser }
    }
}

impl<'code, P> Parser<'code> for Lookahead<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Outcome::Success { value, .. } => Outcome::empty(value, cursor),
            other @ (Outcome::EmptySuccess { .. } | Outcome::Failure { .. }) => other,
        }
    }
}

/// Convenience function to create a Lookahead parser
pub fn lookahead<'code, P>(parser: P) -> Lookahead<P>
where
    P: Parser<'code>,
{
    Lookahead::new(parser)
}

/// Extension trait to add .lookahead() method support for parsers
pub trait LookaheadExt<'code>: Parser<'code> + Sized {
    fn lookahead(self) -> Lookahead<Self> {
        Lookahead::new(self)
    }
}

/// Implement LookaheadExt for all parsers
impl<'code, P> LookaheadExt<'code> for P where P: Parser<'code> {}
