use super::unexpected_here;
use crate::cursor::TextCursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser that consumes one character satisfying a predicate
///
/// Fails without consuming at end of input or when the predicate rejects the
/// character; the message then names what was found.
pub struct SatisfyParser<F> {
    predicate: F,
}

impl<F> SatisfyParser<F> {
    pub fn new(predicate: F) -> Self {
        SatisfyParser { predicate }
    }
}

impl<'code, F> Parser<'code> for SatisfyParser<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        match cursor.current() {
            Some(ch) if (self.predicate)(ch) => Outcome::Success {
                value: ch,
                cursor: cursor.advance(),
            },
            Some(_) | None => Outcome::unconsumed(unexpected_here(&cursor)),
        }
    }
}

/// Convenience function to create a SatisfyParser
pub fn satisfy<F>(predicate: F) -> SatisfyParser<F>
where
    F: Fn(char) -> bool,
{
    SatisfyParser::new(predicate)
}

/// Parser that matches a specific character
pub fn char(expected: char) -> SatisfyParser<impl Fn(char) -> bool> {
    satisfy(move |ch| ch == expected)
}

/// ASCII letter
pub fn alpha() -> SatisfyParser<impl Fn(char) -> bool> {
    satisfy(|ch: char| ch.is_ascii_alphabetic())
}

/// ASCII decimal digit
pub fn digit() -> SatisfyParser<impl Fn(char) -> bool> {
    satisfy(|ch: char| ch.is_ascii_digit())
}

/// ASCII uppercase letter
pub fn upper() -> SatisfyParser<impl Fn(char) -> bool> {
    satisfy(|ch: char| ch.is_ascii_uppercase())
}

/// ASCII lowercase letter
pub fn lower() -> SatisfyParser<impl Fn(char) -> bool> {
    satisfy(|ch: char| ch.is_ascii_lowercase())
}

/// Parser that consumes and returns any single character
pub struct AnyParser;

impl<'code> Parser<'code> for AnyParser {
    type Output = char;

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        match cursor.current() {
            Some(ch) => Outcome::Success {
                value: ch,
                cursor: cursor.advance(),
            },
            None => Outcome::unconsumed(unexpected_here(&cursor)),
        }
    }
}

/// Convenience function to create an AnyParser
pub fn any() -> AnyParser {
    AnyParser
}
