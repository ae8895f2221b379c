use super::take::{SkipWhileParser, skip_while};
use crate::and::{Skip, skip};
use crate::parser::Parser;

/// Space, tab, newline or carriage return
pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

/// Parser that skips any amount of whitespace, including none
pub fn whitespace() -> SkipWhileParser<impl Fn(char) -> bool> {
    skip_while(is_whitespace)
}

/// Run `parser` and then skip trailing whitespace, keeping the parser's value
pub fn lexeme<'code, P>(parser: P) -> Skip<P, SkipWhileParser<impl Fn(char) -> bool>>
where
    P: Parser<'code>,
{
    skip(parser, whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::TextCursor;
    use crate::outcome::Outcome;
    use crate::text::string::literal;

    #[test]
    fn test_whitespace_classifier() {
        for ch in [' ', '\t', '\n', '\r'] {
            assert!(is_whitespace(ch), "{:?}", ch);
        }
        for ch in ['a', '_', '\u{a0}', '\u{b}'] {
            assert!(!is_whitespace(ch), "{:?}", ch);
        }
    }

    #[test]
    fn test_whitespace_mixed() {
        let cursor = TextCursor::new(" \t\r\n abc");
        let (_, rest) = whitespace().parse(cursor).into_result().unwrap();

        assert_eq!(rest.current(), Some('a'));
    }

    #[test]
    fn test_whitespace_none() {
        let cursor = TextCursor::new("abc");

        assert_eq!(whitespace().parse(cursor), Outcome::empty((), cursor));
    }

    #[test]
    fn test_lexeme_skips_trailing_whitespace() {
        let cursor = TextCursor::new("let   x");
        let (keyword, rest) = lexeme(literal("let")).parse(cursor).into_result().unwrap();

        assert_eq!(keyword, "let");
        assert_eq!(rest.rest(), "x");
    }

    #[test]
    fn test_lexeme_failure_untouched() {
        let cursor = TextCursor::new("  let");
        let outcome = lexeme(literal("let")).parse(cursor);

        assert!(!outcome.is_success());
        assert!(!outcome.is_consumed());
    }
}
