use crate::bind::chain;
use crate::cursor::TextCursor;
use crate::error::Message;
use crate::outcome::Outcome;
use crate::parser::Parser;
use tracing::trace;

/// Parser combinator that applies a parser one or more times
///
/// Repetition runs on fuel: the number of characters remaining when the
/// repetition starts, plus one. Each application of the inner parser burns
/// one unit. A sequence of applications that all consume can never need more
/// than that, so only a parser that keeps succeeding without consuming ever
/// runs dry. When it does, repetition stops quietly with what it gathered.
///
/// The result is what the recursive definition
///
/// ```text
/// go(0)     = fail
/// go(n + 1) = bind(p, |a| or_else(go(n), pure([])) prepended with a)
/// many1(p)  = go(remaining + 1)
/// ```
///
/// would give, computed with a loop so the stack stays flat on long inputs:
/// - the first application failing is the result, as is any later
///   application failing after consuming;
/// - otherwise the collected values succeed, consumed if any application
///   consumed, and with the merged latent messages of every application and
///   of the attempt that stopped the loop if none did.
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<'code, P> Parser<'code> for Many1<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        let mut fuel = cursor.remaining_count() + 1;
        let mut values = Vec::new();
        let mut current = cursor;
        // Merged messages while no application has consumed
        let mut latent: Option<Message> = None;
        let mut consumed = false;

        let stop = loop {
            if fuel == 0 {
                trace!(offset = current.offset(), "repetition out of fuel");
                break Message::at(current.offset());
            }
            fuel -= 1;

            match self.parser.parse(current) {
                Outcome::Success { value, cursor } => {
                    values.push(value);
                    current = cursor;
                    consumed = true;
                    latent = None;
                }
                Outcome::EmptySuccess {
                    value,
                    cursor,
                    message,
                } => {
                    values.push(value);
                    current = cursor;
                    if !consumed {
                        latent = Some(match latent {
                            Some(earlier) => earlier.merge(message),
                            None => message,
                        });
                    }
                }
                Outcome::Failure {
                    message,
                    consumed: true,
                } => {
                    return Outcome::Failure {
                        message,
                        consumed: true,
                    };
                }
                Outcome::Failure {
                    message,
                    consumed: false,
                } => {
                    if values.is_empty() {
                        return Outcome::unconsumed(message);
                    }
                    break message;
                }
            }
        };

        if consumed {
            Outcome::Success {
                value: values,
                cursor: current,
            }
        } else {
            let message = match latent {
                Some(latent) => latent.merge(stop),
                None => stop,
            };
            Outcome::EmptySuccess {
                value: values,
                cursor: current,
                message,
            }
        }
    }
}

/// Convenience function to create a Many1 parser
pub fn many1<'code, P>(parser: P) -> Many1<P>
where
    P: Parser<'code>,
{
    Many1::new(parser)
}

/// Parser combinator built as `many1` followed by a pure step
///
/// Note: this is not "zero or more". It inherits `many1`'s failure when the
/// first application fails, so at least one success is required.
pub struct Many<P> {
    inner: Many1<P>,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many {
            inner: Many1::new(parser),
        }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: TextCursor<'code>) -> Outcome<'code, Self::Output> {
        chain(self.inner.parse(cursor), Outcome::empty)
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}
