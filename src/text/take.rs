use super::{END_OF_INPUT, unexpected_here};
use crate::cursor::TextCursor;
use crate::error::Message;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Advance past the longest run of characters satisfying `predicate`
fn scan<'code, F>(cursor: TextCursor<'code>, predicate: &F) -> TextCursor<'code>
where
    F: Fn(char) -> bool,
{
    let mut end = cursor;
    loop {
        match end.current() {
            Some(ch) if predicate(ch) => end = end.advance(),
            Some(_) | None => return end,
        }
    }
}

/// Parser that consumes exactly `count` characters
pub struct TakeParser {
    count: usize,
}

impl TakeParser {
    pub fn new(count: usize) -> Self {
        TakeParser { count }
    }
}

impl<'code> Parser<'code> for TakeParser {
    type Output = &'code str;

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        if self.count == 0 {
            return Outcome::empty("", cursor);
        }

        let mut end = cursor;
        for _ in 0..self.count {
            if !end.has_next() {
                return Outcome::unconsumed(
                    Message::at(end.offset()).with_unexpected(END_OF_INPUT),
                );
            }
            end = end.advance();
        }

        Outcome::Success {
            value: cursor.slice_to(&end),
            cursor: end,
        }
    }
}

/// Convenience function to create a TakeParser
pub fn take(count: usize) -> TakeParser {
    TakeParser::new(count)
}

/// Parser that consumes the longest run of characters satisfying a predicate
///
/// Never fails. Matching nothing is an empty success with `""`.
pub struct TakeWhileParser<F> {
    predicate: F,
}

impl<F> TakeWhileParser<F> {
    pub fn new(predicate: F) -> Self {
        TakeWhileParser { predicate }
    }
}

impl<'code, F> Parser<'code> for TakeWhileParser<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'code str;

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        let end = scan(cursor, &self.predicate);
        if end.offset() == cursor.offset() {
            Outcome::empty("", cursor)
        } else {
            Outcome::Success {
                value: cursor.slice_to(&end),
                cursor: end,
            }
        }
    }
}

/// Convenience function to create a TakeWhileParser
pub fn take_while<F>(predicate: F) -> TakeWhileParser<F>
where
    F: Fn(char) -> bool,
{
    TakeWhileParser::new(predicate)
}

/// Consume characters up to (not including) the first one satisfying `predicate`
pub fn take_until<F>(predicate: F) -> TakeWhileParser<impl Fn(char) -> bool>
where
    F: Fn(char) -> bool,
{
    take_while(move |ch| !predicate(ch))
}

/// Like [`TakeWhileParser`] but at least one character has to match
pub struct TakeWhile1Parser<F> {
    predicate: F,
}

impl<F> TakeWhile1Parser<F> {
    pub fn new(predicate: F) -> Self {
        TakeWhile1Parser { predicate }
    }
}

impl<'code, F> Parser<'code> for TakeWhile1Parser<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'code str;

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        let end = scan(cursor, &self.predicate);
        if end.offset() == cursor.offset() {
            Outcome::unconsumed(unexpected_here(&cursor))
        } else {
            Outcome::Success {
                value: cursor.slice_to(&end),
                cursor: end,
            }
        }
    }
}

/// Convenience function to create a TakeWhile1Parser
pub fn take_while1<F>(predicate: F) -> TakeWhile1Parser<F>
where
    F: Fn(char) -> bool,
{
    TakeWhile1Parser::new(predicate)
}

/// [`TakeWhileParser`] that discards the matched text
pub struct SkipWhileParser<F> {
    predicate: F,
}

impl<F> SkipWhileParser<F> {
    pub fn new(predicate: F) -> Self {
        SkipWhileParser { predicate }
    }
}

impl<'code, F> Parser<'code> for SkipWhileParser<F>
where
    F: Fn(char) -> bool,
{
    type Output = ();

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        let end = scan(cursor, &self.predicate);
        if end.offset() == cursor.offset() {
            Outcome::empty((), cursor)
        } else {
            Outcome::Success {
                value: (),
                cursor: end,
            }
        }
    }
}

/// Convenience function to create a SkipWhileParser
pub fn skip_while<F>(predicate: F) -> SkipWhileParser<F>
where
    F: Fn(char) -> bool,
{
    SkipWhileParser::new(predicate)
}

/// [`TakeWhile1Parser`] that discards the matched text
pub struct SkipWhile1Parser<F> {
    predicate: F,
}

impl<F> SkipWhile1Parser<F> {
    pub fn new(predicate: F) -> Self {
        SkipWhile1Parser { predicate }
    }
}

impl<'code, F> Parser<'code> for SkipWhile1Parser<F>
where
    F: Fn(char) -> bool,
{
    type Output = ();

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        let end = scan(cursor, &self.predicate);
        if end.offset() == cursor.offset() {
            Outcome::unconsumed(unexpected_here(&cursor))
        } else {
            Outcome::Success {
                value: (),
                cursor: end,
            }
        }
    }
}

/// Convenience function to create a SkipWhile1Parser
pub fn skip_while1<F>(predicate: F) -> SkipWhile1Parser<F>
where
    F: Fn(char) -> bool,
{
    SkipWhile1Parser::new(predicate)
}
