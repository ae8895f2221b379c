use crate::cursor::TextCursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser combinator that turns any failure into an unconsumed one
///
/// An enclosing [`crate::or::OrElse`] may then try its next alternative even
/// though the wrapped parser advanced before failing. This is the only way to
/// backtrack over consumed input. Successes pass through untouched.
pub struct Attempt<P> {
    parser: P,
}

impl<P> Attempt<P> {
    pub fn new(parser: P) -> Self {
        Attempt { parser }
    }
}

impl<'code, P> Parser<'code> for Attempt<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Outcome::Failure { message, .. } => Outcome::Failure {
                message,
                consumed: false,
            },
            success @ (Outcome::Success { .. } | Outcome::EmptySuccess { .. }) => success,
        }
    }
}

/// Convenience function to create an Attempt parser
pub fn attempt<'code, P>(parser: P) -> Attempt<P>
where
    P: Parser<'code>,
{
    Attempt::new(parser)
}

/// Extension trait to add .attempt() method support for parsers
pub trait AttemptExt<'code>: Parser<'code> + Sized {
    fn attempt(self) -> Attempt<Self> {
        Attempt::new(self)
    }
}

/// Implement AttemptExt for all parsers
impl<'code, P> AttemptExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::error::Message;
    use crate::map::MapExt;
    use crate::or::OrExt;
    use crate::text::character::char;

    #[test]
    fn test_attempt_clears_consumed_flag() {
        let cursor = TextCursor::new("ac");
        let parser = attempt(char('a').and(char('b')));

        assert_eq!(
            parser.parse(cursor),
            Outcome::Failure {
                message: Message::at(1).with_unexpected("'c'"),
                consumed: false,
            }
        );
    }

    #[test]
    fn test_attempt_passes_success_through() {
        let cursor = TextCursor::new("ab");
        let parser = char('a').and(char('b')).attempt();

        assert_eq!(
            parser.parse(cursor),
            Outcome::Success {
                value: ('a', 'b'),
                cursor: cursor.advance().advance()
            }
        );
    }

    #[test]
    fn test_attempt_enables_second_alternative() {
        let cursor = TextCursor::new("ac");
        let ab = || char('a').and(char('b')).map(|_| "ab");
        let ac = || char('a').and(char('c')).map(|_| "ac");

        let without = ab().or_else(ac());
        assert!(matches!(
            without.parse(cursor),
            Outcome::Failure {
                consumed: true,
                ..
            }
        ));

        let with = ab().attempt().or_else(ac());
        let (value, rest) = with.parse(cursor).into_result().unwrap();
        assert_eq!(value, "ac");
        assert!(!rest.has_next());
    }
}
