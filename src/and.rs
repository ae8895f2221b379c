use crate::bind::chain;
use crate::cursor::TextCursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`. The
/// destructuring pattern is explicit about the parsing order.
///
/// Consumption and diagnostics follow [`chain`] exactly, as if written with
/// [`crate::bind::bind`].
///
/// Example:
/// ```
/// use parsecomb::and::AndExt;
/// use parsecomb::text::{char, number};
/// use parsecomb::run::run;
///
/// let ((major, _), minor) = run(number().and(char('.')).and(number()), "12.4").unwrap();
/// assert_eq!(major, 12);
/// assert_eq!(minor, 4);
/// ```
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        chain(self.parser1.parse(cursor), |first, cursor| {
            self.parser2.parse(cursor).map(|second| (first, second))
        })
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    And::new(parser1, parser2)
}

/// Sequence two parsers, keeping the second result
pub struct Then<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Then<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Then { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Then<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        chain(self.parser1.parse(cursor), |_, cursor| {
            self.parser2.parse(cursor)
        })
    }
}

/// Convenience function to create a Then parser
pub fn then<'code, P1, P2>(parser1: P1, parser2: P2) -> Then<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    Then::new(parser1, parser2)
}

/// Sequence two parsers, keeping the first result
pub struct Skip<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Skip<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Skip { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Skip<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P1::Output;

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        chain(self.parser1.parse(cursor), |first, cursor| {
            self.parser2.parse(cursor).map(|_| first)
        })
    }
}

/// Convenience function to create a Skip parser
pub fn skip<'code, P1, P2>(parser1: P1, parser2: P2) -> Skip<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    Skip::new(parser1, parser2)
}

/// Extension trait to add .and(), .then() and .skip() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code>,
    {
        And::new(self, other)
    }

    fn then<P>(self, other: P) -> Then<Self, P>
    where
        P: Parser<'code>,
    {
        Then::new(self, other)
    }

    fn skip<P>(self, other: P) -> Skip<Self, P>
    where
        P: Parser<'code>,
    {
        Skip::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}
