use crate::cursor::TextCursor;
use crate::error::Message;
use crate::outcome::Outcome;
use crate::parser::Parser;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that succeeds with a fixed value without consuming input
pub struct Pure<T> {
    value: T,
}

impl<T> Pure<T> {
    pub fn new(value: T) -> Self {
        Pure { value }
    }
}

impl<'code, T> Parser<'code> for Pure<T>
where
    T: Clone,
{
    type Output = T;

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        Outcome::empty(self.value.clone(), cursor)
    }
}

/// Convenience function to create a Pure parser
pub fn pure<T: Clone>(value: T) -> Pure<T> {
    Pure::new(value)
}

/// Parser that always succeeds without consuming input and returns the default value of T
pub struct DefaultParser<T> {
    _phantom: PhantomData<T>,
}

impl<T> DefaultParser<T> {
    pub fn new() -> Self {
        DefaultParser {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for DefaultParser<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'code, T> Parser<'code> for DefaultParser<T>
where
    T: Default,
{
    type Output = T;

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        Outcome::empty(T::default(), cursor)
    }
}

/// Convenience function to create a default parser
pub fn default<T: Default>() -> DefaultParser<T> {
    DefaultParser::new()
}

/// Parser that always fails without consuming input
pub struct Fail<T> {
    unexpected: Cow<'static, str>,
    _phantom: PhantomData<T>,
}

impl<T> Fail<T> {
    pub fn new(unexpected: impl Into<Cow<'static, str>>) -> Self {
        Fail {
            unexpected: unexpected.into(),
            _phantom: PhantomData,
        }
    }
}

impl<'code, T> Parser<'code> for Fail<T> {
    type Output = T;

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        Outcome::unconsumed(Message::at(cursor.offset()).with_unexpected(self.unexpected.clone()))
    }
}

/// Convenience function to create a parser that always fails with `unexpected`
pub fn fail<T>(unexpected: impl Into<Cow<'static, str>>) -> Fail<T> {
    Fail::new(unexpected)
}
