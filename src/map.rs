use crate::cursor::TextCursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser combinator that transforms the output of a parser using a mapping function
///
/// Behaves like `bind(parser, |a| pure(mapper(a)))`: a pure step after an
/// empty success only contributes an empty expectation list, so outcomes keep
/// their shape and only the value changes.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        self.parser.parse(cursor).map(&self.mapper)
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bind::BindExt;
    use crate::error::Message;
    use crate::or::OrExt;
    use crate::pure::pure;
    use crate::text::character::{alpha, char, digit};
    use crate::text::number::number;

    #[derive(Debug, PartialEq, Clone)]
    enum Token {
        Letter(char),
        Number(u64),
        Special(char),
    }

    #[test]
    fn test_map_char_to_digit_value() {
        let cursor = TextCursor::new("7");
        let parser = digit().map(|ch| ch.to_digit(10));

        assert_eq!(
            parser.parse(cursor),
            Outcome::Success {
                value: Some(7),
                cursor: cursor.advance()
            }
        );
    }

    #[test]
    fn test_map_into_tokens() {
        let parser = alpha()
            .map(Token::Letter)
            .or_else(number().map(Token::Number))
            .or_else(char('+').map(Token::Special));

        let run = |input| parser.parse(TextCursor::new(input)).into_result().map(|(t, _)| t);
        assert_eq!(run("x1"), Ok(Token::Letter('x')));
        assert_eq!(run("12x"), Ok(Token::Number(12)));
        assert_eq!(run("+"), Ok(Token::Special('+')));
        assert!(run("?").is_err());
    }

    #[test]
    fn test_map_matches_bind_with_pure() {
        for input in ["", "a", "5"] {
            let cursor = TextCursor::new(input);
            let mapped = digit().map(|ch| ch as u32).parse(cursor);
            let bound = digit().bind(|ch| pure(ch as u32)).parse(cursor);
            assert_eq!(mapped, bound, "input {:?}", input);
        }
    }

    #[test]
    fn test_map_keeps_latent_message() {
        let cursor = TextCursor::new("abc");
        let outcome = pure(1).map(|n| n + 1).parse(cursor);

        assert_eq!(
            outcome,
            Outcome::EmptySuccess {
                value: 2,
                cursor,
                message: Message::at(0),
            }
        );
    }
}
