//! Parsers that inspect the cursor without consuming anything

use crate::cursor::TextCursor;
use crate::error::Message;
use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::text::unexpected_here;

/// Number of characters left to read
pub struct RemainingParser;

impl<'code> Parser<'code> for RemainingParser {
    type Output = usize;

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        Outcome::empty(cursor.remaining_count(), cursor)
    }
}

/// Convenience function to create a RemainingParser
pub fn remaining() -> RemainingParser {
    RemainingParser
}

/// Byte offset of the cursor
pub struct PositionParser;

impl<'code> Parser<'code> for PositionParser {
    type Output = usize;

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        Outcome::empty(cursor.offset(), cursor)
    }
}

/// Convenience function to create a PositionParser
pub fn position() -> PositionParser {
    PositionParser
}

/// The cursor itself
pub struct RestParser;

impl<'code> Parser<'code> for RestParser {
    type Output = TextCursor<'code>;

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        Outcome::empty(cursor, cursor)
    }
}

/// Convenience function to create a RestParser
pub fn rest() -> RestParser {
    RestParser
}

/// Succeeds without consuming when at least `count` characters remain
pub struct EnsureParser {
    count: usize,
}

impl EnsureParser {
    pub fn new(count: usize) -> Self {
        EnsureParser { count }
    }
}

impl<'code> Parser<'code> for EnsureParser {
    type Output = ();

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        // Walks at most `count` characters, not the whole rest
        if self.count == 0 || cursor.rest().chars().nth(self.count - 1).is_some() {
            Outcome::empty((), cursor)
        } else {
            Outcome::unconsumed(
                Message::at(cursor.offset())
                    .with_expected(format!("at least {} characters", self.count)),
            )
        }
    }
}

/// Convenience function to create an EnsureParser for `count` characters
pub fn ensure(count: usize) -> EnsureParser {
    EnsureParser::new(count)
}

/// Succeeds without consuming only at end of input
pub struct EndOfInputParser;

impl<'code> Parser<'code> for EndOfInputParser {
    type Output = ();

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        if cursor.has_next() {
            Outcome::unconsumed(unexpected_here(&cursor).with_expected("end of input"))
        } else {
            Outcome::empty((), cursor)
        }
    }
}

/// Convenience function to create an EndOfInputParser
pub fn end_of_input() -> EndOfInputParser {
    EndOfInputParser
}
