//! Entry points that drive a parser over a whole input string

use crate::and::Skip;
use crate::cursor::TextCursor;
use crate::error::{Message, ParseError};
use crate::introspect::end_of_input;
use crate::outcome::Outcome;
use crate::parser::Parser;
use tracing::debug;

/// Options for running parsers
///
/// ```
/// use parsecomb::Runner;
/// use parsecomb::text::literal;
///
/// let runner = Runner::new().source_name("greeting.txt");
/// let error = runner.parse_to_end(literal("hi"), "hi!").unwrap_err();
///
/// assert_eq!(error.source_name(), Some("greeting.txt"));
/// assert_eq!(error.position(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Runner {
    source_name: Option<String>,
}

impl Runner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label the input, e.g. with a file name. Carried into [`ParseError`].
    pub fn source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    /// Run `parser` from the start of `input`, ignoring whatever it leaves over
    pub fn run<'code, P>(&self, parser: P, input: &'code str) -> Result<P::Output, ParseError>
    where
        P: Parser<'code>,
    {
        self.parse_with_remainder(parser, input).map(|(value, _)| value)
    }

    /// Run `parser` and require that it used up all of `input`
    pub fn parse_to_end<'code, P>(
        &self,
        parser: P,
        input: &'code str,
    ) -> Result<P::Output, ParseError>
    where
        P: Parser<'code>,
    {
        self.run(Skip::new(parser, end_of_input()), input)
    }

    /// Run `parser` and hand back the cursor where it stopped
    pub fn parse_with_remainder<'code, P>(
        &self,
        parser: P,
        input: &'code str,
    ) -> Result<(P::Output, TextCursor<'code>), ParseError>
    where
        P: Parser<'code>,
    {
        debug!(
            source = self.source_name.as_deref().unwrap_or("<input>"),
            length = input.len(),
            "parsing"
        );

        match parser.parse(TextCursor::new(input)) {
            Outcome::Success { value, cursor } | Outcome::EmptySuccess { value, cursor, .. } => {
                Ok((value, cursor))
            }
            Outcome::Failure { message, consumed } => {
                debug!(pos = message.pos, consumed, "parse failed");
                Err(self.error(message, input))
            }
        }
    }

    fn error(&self, message: Message, input: &str) -> ParseError {
        ParseError::new(message, input, self.source_name.clone())
    }
}

/// Run `parser` over `input` with default options
///
/// ```
/// use parsecomb::run;
/// use parsecomb::text::literal;
///
/// assert_eq!(run(literal("abc"), "abc").unwrap(), "abc");
///
/// let error = run(literal("abc"), "abd").unwrap_err();
/// assert_eq!(error.position(), 2);
/// assert_eq!(error.message().unexpected, "'d'");
/// ```
pub fn run<'code, P>(parser: P, input: &'code str) -> Result<P::Output, ParseError>
where
    P: Parser<'code>,
{
    Runner::default().run(parser, input)
}

/// Like [`run`], additionally requiring end of input after `parser`
pub fn parse_to_end<'code, P>(parser: P, input: &'code str) -> Result<P::Output, ParseError>
where
    P: Parser<'code>,
{
    Runner::default().parse_to_end(parser, input)
}

/// Like [`run`], also returning the cursor where `parser` stopped
pub fn parse_with_remainder<'code, P>(
    parser: P,
    input: &'code str,
) -> Result<(P::Output, TextCursor<'code>), ParseError>
where
    P: Parser<'code>,
{
    Runner::default().parse_with_remainder(parser, input)
}
