use crate::cursor::TextCursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser combinator for ordered choice
///
/// The first parser is committed to as soon as it consumes input, whether it
/// then succeeds or fails, and the second parser is never run. Only when the
/// first parser consumed nothing is the second one tried from the same
/// position, and the diagnostics of both are merged.
///
/// | first | second | result |
/// |---|---|---|
/// | consumed | not run | first |
/// | `EmptySuccess(a, it, m1)` | `EmptySuccess(_, _, m2)` | `EmptySuccess(a, it, m1.merge(m2))` |
/// | `EmptySuccess(a, it, m1)` | `Failure(m2, false)` | `EmptySuccess(a, it, m1.merge(m2))` |
/// | `Failure(m1, false)` | `EmptySuccess(b, it, m2)` | `EmptySuccess(b, it, m1.merge(m2))` |
/// | `Failure(m1, false)` | `Failure(m2, false)` | `Failure(m1.merge(m2), false)` |
/// | not consumed | consumed | second |
pub struct OrElse<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> OrElse<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        OrElse { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for OrElse<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        match self.parser1.parse(cursor) {
            committed @ (Outcome::Success { .. } | Outcome::Failure { consumed: true, .. }) => {
                committed
            }
            Outcome::EmptySuccess {
                value,
                cursor: after,
                message: first,
            } => match self.parser2.parse(cursor) {
                Outcome::EmptySuccess { message, .. }
                | Outcome::Failure {
                    message,
                    consumed: false,
                } => Outcome::EmptySuccess {
                    value,
                    cursor: after,
                    message: first.merge(message),
                },
                committed @ (Outcome::Success { .. } | Outcome::Failure { consumed: true, .. }) => {
                    committed
                }
            },
            Outcome::Failure {
                message: first,
                consumed: false,
            } => match self.parser2.parse(cursor) {
                Outcome::EmptySuccess {
                    value,
                    cursor,
                    message,
                } => Outcome::EmptySuccess {
                    value,
                    cursor,
                    message: first.merge(message),
                },
                Outcome::Failure {
                    message,
                    consumed: false,
                } => Outcome::Failure {
                    message: first.merge(message),
                    consumed: false,
                },
                committed @ (Outcome::Success { .. } | Outcome::Failure { consumed: true, .. }) => {
                    committed
                }
            },
        }
    }
}

/// Extension trait to add .or_else() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or_else<P>(self, other: P) -> OrElse<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        OrElse::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an OrElse parser
pub fn or_else<'code, P1, P2, O>(parser1: P1, parser2: P2) -> OrElse<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    OrElse::new(parser1, parser2)
}
