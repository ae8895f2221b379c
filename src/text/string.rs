use super::END_OF_INPUT;
use crate::cursor::TextCursor;
use crate::error::Message;
use crate::outcome::Outcome;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that matches an exact string, all or nothing
///
/// A mismatch anywhere, including running out of input part way through, is
/// an unconsumed failure whose message points at the offending character.
/// The empty string always matches without consuming.
pub struct LiteralParser {
    expected: Cow<'static, str>,
}

impl LiteralParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    fn mismatch(&self, at: &TextCursor<'_>, found: Option<char>) -> Message {
        let message = Message::at(at.offset()).with_expected(format!("{:?}", self.expected));
        match found {
            Some(ch) => message.with_unexpected(format!("{:?}", ch)),
            None => message.with_unexpected(END_OF_INPUT),
        }
    }
}

impl<'code> Parser<'code> for LiteralParser {
    type Output = &'code str;

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        if self.expected.is_empty() {
            return Outcome::empty("", cursor);
        }

        let mut current = cursor;
        for expected_char in self.expected.chars() {
            match current.current() {
                Some(ch) if ch == expected_char => current = current.advance(),
                found => return Outcome::unconsumed(self.mismatch(&current, found)),
            }
        }

        Outcome::Success {
            value: cursor.slice_to(&current),
            cursor: current,
        }
    }
}

/// Convenience function to create a LiteralParser
pub fn literal(expected: impl Into<Cow<'static, str>>) -> LiteralParser {
    LiteralParser::new(expected)
}
