use super::take::{TakeWhile1Parser, take_while1};
use crate::bind::chain;
use crate::cursor::TextCursor;
use crate::error::Message;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser that matches one or more ASCII digits and returns them as a u64
///
/// Values are limited to `u64::MAX`. A longer digit run is a consumed failure
/// at the first digit with unexpected `number too large`.
pub struct NumberParser<F> {
    digits: TakeWhile1Parser<F>,
}

fn to_number(digits: &str, start: usize) -> Result<u64, Message> {
    digits
        .parse::<u64>()
        .map_err(|_| Message::at(start).with_unexpected("number too large"))
}

impl<'code, F> Parser<'code> for NumberParser<F>
where
    F: Fn(char) -> bool,
{
    type Output = u64;

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        let start = cursor.offset();
        chain(self.digits.parse(cursor), |digits, end| match to_number(digits, start) {
            Ok(value) => Outcome::empty(value, end),
            Err(message) => Outcome::unconsumed(message),
        })
    }
}

/// Convenience function to create a NumberParser
///
/// Digits past `u64::MAX` fail; use
/// [`take_while1`](super::take::take_while1) for the digit slice instead.
pub fn number() -> NumberParser<impl Fn(char) -> bool> {
    NumberParser {
        digits: take_while1(|ch: char| ch.is_ascii_digit()),
    }
}
