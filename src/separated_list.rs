use crate::and::Then;
use crate::bind::chain;
use crate::cursor::TextCursor;
use crate::many::Many;
use crate::or::OrElse;
use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::pure::DefaultParser;

/// Parser combinator that matches items separated by a parser
///
/// Parses one item, then [`many`](crate::many::many) of (separator + item),
/// and returns all items in order.
///
/// # Note
/// - Because `many` needs at least one repetition, a lone item with no
///   separator after it is a consumed failure: `"5"` is rejected while
///   `"5,6"` gives `[5, 6]`
/// - A trailing separator is a consumed failure as well
/// - Does not handle whitespace automatically
pub struct SepBy1<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SepBy1<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SepBy1 { parser, separator }
    }
}

impl<'code, P, PS> Parser<'code> for SepBy1<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        chain(self.parser.parse(cursor), |first, cursor| {
            let tail = Many::new(Then::new(&self.separator, &self.parser));
            tail.parse(cursor).map(|rest| {
                let mut items = Vec::with_capacity(rest.len() + 1);
                items.push(first);
                items.extend(rest);
                items
            })
        })
    }
}

/// Convenience function to create a SepBy1 parser
pub fn sep_by1<'code, P, PS>(parser: P, separator: PS) -> SepBy1<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    SepBy1::new(parser, separator)
}

/// [`SepBy1`] or else an empty list
///
/// The empty list is only reached when the first item fails without
/// consuming.
pub struct SepBy<P, PS> {
    inner: SepBy1<P, PS>,
}

impl<P, PS> SepBy<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SepBy {
            inner: SepBy1::new(parser, separator),
        }
    }
}

impl<'code, P, PS> Parser<'code> for SepBy<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        OrElse::new(&self.inner, DefaultParser::<Self::Output>::new()).parse(cursor)
    }
}

/// Convenience function to create a SepBy parser
pub fn sep_by<'code, P, PS>(parser: P, separator: PS) -> SepBy<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    SepBy::new(parser, separator)
}
