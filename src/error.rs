use crate::cursor::line_column;
use std::borrow::Cow;
use std::fmt::Write;
use thiserror::Error;

/// A diagnostic: where parsing stopped, what was found there and what
/// alternatives would have been accepted
///
/// Messages are plain values. Competing branches of a choice fold their
/// messages together with [`Message::merge`] and [`Message::merge_right`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    /// Byte offset the diagnostic refers to
    pub pos: usize,
    /// Description of what was found, empty when not known
    pub unexpected: Cow<'static, str>,
    /// Productions that would have been accepted, in the order they were tried
    pub expected: Vec<Cow<'static, str>>,
}

impl Message {
    /// A message carrying only a position
    pub fn at(pos: usize) -> Self {
        Message {
            pos,
            ..Message::default()
        }
    }

    pub fn with_unexpected(mut self, unexpected: impl Into<Cow<'static, str>>) -> Self {
        self.unexpected = unexpected.into();
        self
    }

    pub fn with_expected(mut self, expected: impl Into<Cow<'static, str>>) -> Self {
        self.expected.push(expected.into());
        self
    }

    /// Accumulate both expectation lists, keeping `self`'s position and
    /// unexpected text
    pub fn merge(mut self, other: Message) -> Self {
        self.expected.extend(other.expected);
        self
    }

    /// Accumulate both expectation lists, keeping `other`'s position and
    /// unexpected text
    pub fn merge_right(self, other: Message) -> Self {
        let mut expected = self.expected;
        expected.extend(other.expected);
        Message { expected, ..other }
    }

    /// Human readable form, qualified with the line and column of `pos` in `input`
    ///
    /// ```
    /// use parsecomb::Message;
    ///
    /// let message = Message::at(3).with_unexpected("'c'").with_expected("digit");
    /// assert_eq!(
    ///     message.render("ab\ncd"),
    ///     "error at (line: 2, column: 1)\nunexpected 'c'\nexpected digit"
    /// );
    /// ```
    pub fn render(&self, input: &str) -> String {
        let (line, column) = line_column(input, self.pos);
        let mut rendered = format!(
            "error at (line: {}, column: {})\nunexpected {}\n",
            line, column, self.unexpected
        );
        if !self.expected.is_empty() {
            rendered.push_str("expected ");
            rendered.push_str(&join_expected(&self.expected));
        }
        rendered
    }

    /// Structural form, stable enough for golden tests
    pub fn debug_string(&self) -> String {
        let mut expected = String::new();
        for (i, label) in self.expected.iter().enumerate() {
            if i > 0 {
                expected.push_str(", ");
            }
            // Writing to a String cannot fail
            let _ = write!(expected, "{:?}", label);
        }
        format!(
            "{{pos := {}, unexpected := {:?}, expected := [{}]}}",
            self.pos, self.unexpected, expected
        )
    }
}

/// Join expected productions into prose
///
/// `[]` gives an empty string, `[a]` gives `a`, `[a, b]` gives `a or b` and
/// longer lists give `a, b, and c`.
pub fn join_expected<S: AsRef<str>>(expected: &[S]) -> String {
    match expected {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} or {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let init: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{}, and {}", init.join(", "), last.as_ref())
        }
    }
}

/// Failure surfaced by the entry points in [`crate::run`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{rendered}")]
pub struct ParseError {
    message: Message,
    source_name: Option<String>,
    rendered: String,
}

impl ParseError {
    pub fn new(message: Message, input: &str, source_name: Option<String>) -> Self {
        let rendered = message.render(input);
        ParseError {
            message,
            source_name,
            rendered,
        }
    }

    /// The outstanding diagnostic
    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn into_message(self) -> Message {
        self.message
    }

    /// Label of the input, as given to the runner
    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    /// Byte offset the failure refers to
    pub fn position(&self) -> usize {
        self.message.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_expected_shapes() {
        let none: [&str; 0] = [];
        assert_eq!(join_expected(&none), "");
        assert_eq!(join_expected(&["digit"]), "digit");
        assert_eq!(join_expected(&["digit", "letter"]), "digit or letter");
        assert_eq!(
            join_expected(&["digit", "letter", "'_'"]),
            "digit, letter, and '_'"
        );
        assert_eq!(join_expected(&["a", "b", "c", "d"]), "a, b, c, and d");
    }

    #[test]
    fn test_merge_keeps_left_fields() {
        let left = Message::at(1).with_unexpected("'x'").with_expected("a");
        let right = Message::at(5).with_unexpected("'y'").with_expected("b");

        let merged = left.merge(right);
        assert_eq!(merged.pos, 1);
        assert_eq!(merged.unexpected, "'x'");
        assert_eq!(merged.expected, vec!["a", "b"]);
    }

    #[test]
    fn test_merge_right_keeps_right_fields() {
        let left = Message::at(1).with_unexpected("'x'").with_expected("a");
        let right = Message::at(5).with_unexpected("'y'").with_expected("b");

        let merged = left.merge_right(right);
        assert_eq!(merged.pos, 5);
        assert_eq!(merged.unexpected, "'y'");
        assert_eq!(merged.expected, vec!["a", "b"]);
    }

    #[test]
    fn test_render_without_expected() {
        let message = Message::at(3).with_unexpected("end of input");
        assert_eq!(
            message.render("ab\ncd"),
            "error at (line: 2, column: 1)\nunexpected end of input\n"
        );
    }

    #[test]
    fn test_render_with_expected() {
        let message = Message::at(0)
            .with_unexpected("'x'")
            .with_expected("digit")
            .with_expected("letter");
        assert_eq!(
            message.render("x"),
            "error at (line: 1, column: 1)\nunexpected 'x'\nexpected digit or letter"
        );
    }

    #[test]
    fn test_debug_string() {
        let message = Message::at(2)
            .with_unexpected("'d'")
            .with_expected("\"abc\"")
            .with_expected("digit");
        assert_eq!(
            message.debug_string(),
            r#"{pos := 2, unexpected := "'d'", expected := ["\"abc\"", "digit"]}"#
        );
        assert_eq!(
            Message::at(0).debug_string(),
            r#"{pos := 0, unexpected := "", expected := []}"#
        );
    }

    #[test]
    fn test_parse_error_display_is_rendered_message() {
        let message = Message::at(1).with_unexpected("'b'");
        let error = ParseError::new(message.clone(), "ab", Some("input.txt".to_string()));

        assert_eq!(
            error.to_string(),
            "error at (line: 1, column: 2)\nunexpected 'b'\n"
        );
        assert_eq!(error.message(), &message);
        assert_eq!(error.source_name(), Some("input.txt"));
        assert_eq!(error.position(), 1);
    }
}
