use crate::cursor::TextCursor;
use crate::outcome::Outcome;
use std::rc::Rc;

/// Core parser trait for parser combinators
///
/// A parser is a pure function from a cursor to an [`Outcome`]. It never
/// mutates the cursor it is given; on success it hands back a new one.
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position
    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output>;
}

/// Type-erased parser, mostly useful for recursive grammars
pub type BoxedParser<'code, T> = Box<dyn Parser<'code, Output = T> + 'code>;

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Rc<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

/// Parser backed by a closure over the cursor
pub struct FnParser<F> {
    f: F,
}

impl<'code, F, T> Parser<'code> for FnParser<F>
where
    F: Fn(TextCursor<'code>) -> Outcome<'code, T>,
{
    type Output = T;

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        (self.f)(cursor)
    }
}

/// Turn a closure into a parser
pub fn from_fn<'code, F, T>(f: F) -> FnParser<F>
where
    F: Fn(TextCursor<'code>) -> Outcome<'code, T>,
{
    FnParser { f }
}

/// Erase a parser's type
pub fn boxed<'code, P>(parser: P) -> BoxedParser<'code, P::Output>
where
    P: Parser<'code> + 'code,
{
    Box::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Message;

    #[test]
    fn test_from_fn() {
        let parser = from_fn(|cursor| match cursor.current() {
            Some(ch) => Outcome::Success {
                value: ch,
                cursor: cursor.advance(),
            },
            None => Outcome::unconsumed(Message::at(cursor.offset())),
        });

        let cursor = TextCursor::new("hi");
        let outcome = parser.parse(cursor);
        assert_eq!(
            outcome,
            Outcome::Success {
                value: 'h',
                cursor: cursor.advance()
            }
        );
    }

    #[test]
    fn test_reference_box_and_rc_delegate() {
        let parser = from_fn(|cursor| Outcome::empty(1, cursor));
        let cursor = TextCursor::new("");

        assert_eq!((&parser).parse(cursor), Outcome::empty(1, cursor));

        let erased: BoxedParser<'_, i32> = boxed(from_fn(|cursor| Outcome::empty(2, cursor)));
        assert_eq!(erased.parse(cursor), Outcome::empty(2, cursor));

        let shared = Rc::new(parser);
        assert_eq!(shared.parse(cursor), Outcome::empty(1, cursor));
    }
}
