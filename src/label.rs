use crate::cursor::TextCursor;
use crate::error::Message;
use crate::outcome::Outcome;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser combinator that names what the wrapped parser expects
///
/// Only outcomes that left the choice open are relabelled: an empty success
/// or an unconsumed failure has its expectation list replaced by the label.
/// Consumed outcomes are committed and pass through untouched.
pub struct Label<P> {
    parser: P,
    label: Cow<'static, str>,
}

impl<P> Label<P> {
    pub fn new(parser: P, label: impl Into<Cow<'static, str>>) -> Self {
        Label {
            parser,
            label: label.into(),
        }
    }

    fn relabel(&self, message: Message) -> Message {
        Message {
            expected: vec![self.label.clone()],
            ..message
        }
    }
}

impl<'code, P> Parser<'code> for Label<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Outcome::EmptySuccess {
                value,
                cursor,
                message,
            } => Outcome::EmptySuccess {
                value,
                cursor,
                message: self.relabel(message),
            },
            Outcome::Failure {
                message,
                consumed: false,
            } => Outcome::Failure {
                message: self.relabel(message),
                consumed: false,
            },
            committed @ (Outcome::Success { .. } | Outcome::Failure { consumed: true, .. }) => {
                committed
            }
        }
    }
}

/// Extension trait to add .label() method support for parsers
pub trait LabelExt<'code>: Parser<'code> + Sized {
    fn label(self, label: impl Into<Cow<'static, str>>) -> Label<Self> {
        Label::new(self, label)
    }
}

/// Implement LabelExt for all parsers
impl<'code, P> LabelExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Label parser
pub fn label<'code, P>(parser: P, label: impl Into<Cow<'static, str>>) -> Label<P>
where
    P: Parser<'code>,
{
    Label::new(parser, label)
}
