use crate::cursor::TextCursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Sequence an outcome with the continuation that runs after it
///
/// This is the single place where consumption and message accumulation rules
/// for sequencing live. Every sequencing combinator goes through it.
///
/// | first | second | result |
/// |---|---|---|
/// | `Failure(m, c)` | not run | `Failure(m, c)` |
/// | `Success` | `EmptySuccess(b, it, _)` | `Success(b, it)` |
/// | `Success` | `Failure(m, false)` | `Failure(m, true)` |
/// | `Success` | consumed | second, unchanged |
/// | `EmptySuccess(_, _, m1)` | `EmptySuccess(b, it, m2)` | `EmptySuccess(b, it, m1.merge(m2))` |
/// | `EmptySuccess(_, _, m1)` | `Failure(m2, false)` | `Failure(m1.merge_right(m2), false)` |
/// | `EmptySuccess` | consumed | second, unchanged |
pub fn chain<'code, A, B, F>(first: Outcome<'code, A>, next: F) -> Outcome<'code, B>
where
    F: FnOnce(A, TextCursor<'code>) -> Outcome<'code, B>,
{
    match first {
        Outcome::Failure { message, consumed } => Outcome::Failure { message, consumed },
        Outcome::Success { value, cursor } => match next(value, cursor) {
            Outcome::EmptySuccess { value, cursor, .. } => Outcome::Success { value, cursor },
            Outcome::Failure {
                message,
                consumed: false,
            } => Outcome::Failure {
                message,
                consumed: true,
            },
            committed @ (Outcome::Success { .. } | Outcome::Failure { consumed: true, .. }) => {
                committed
            }
        },
        Outcome::EmptySuccess {
            value,
            cursor,
            message: latent,
        } => match next(value, cursor) {
            Outcome::EmptySuccess {
                value,
                cursor,
                message,
            } => Outcome::EmptySuccess {
                value,
                cursor,
                message: latent.merge(message),
            },
            Outcome::Failure {
                message,
                consumed: false,
            } => Outcome::Failure {
                message: latent.merge_right(message),
                consumed: false,
            },
            committed @ (Outcome::Success { .. } | Outcome::Failure { consumed: true, .. }) => {
                committed
            }
        },
    }
}

/// Parser combinator that feeds the value of one parser into a function
/// choosing the next parser
pub struct Bind<P, F> {
    parser: P,
    next: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, next: F) -> Self {
        Bind { parser, next }
    }
}

impl<'code, P, F, Q> Parser<'code> for Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    type Output = Q::Output;

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        chain(self.parser.parse(cursor), |value, cursor| {
            (self.next)(value).parse(cursor)
        })
    }
}

/// Convenience function to create a Bind parser
pub fn bind<'code, P, F, Q>(parser: P, next: F) -> Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    Bind::new(parser, next)
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt<'code>: Parser<'code> + Sized {
    fn bind<F, Q>(self, next: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code>,
    {
        Bind::new(self, next)
    }
}

/// Implement BindExt for all parsers
impl<'code, P> BindExt<'code> for P where P: Parser<'code> {}
