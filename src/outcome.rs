use crate::cursor::TextCursor;
use crate::error::Message;

/// Result of running a parser
///
/// Besides success and failure, an outcome records whether input was consumed.
/// That bit decides how sequencing and choice combine results, see
/// [`crate::bind`] and [`crate::or`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<'code, T> {
    /// Succeeded after consuming input
    Success { value: T, cursor: TextCursor<'code> },
    /// Succeeded without consuming input
    ///
    /// `message` is the diagnostic that would have been reported had this
    /// branch not been taken; alternatives tried later add their expectations
    /// to it.
    EmptySuccess {
        value: T,
        cursor: TextCursor<'code>,
        message: Message,
    },
    /// Failed, possibly after consuming input
    Failure { message: Message, consumed: bool },
}

impl<'code, T> Outcome<'code, T> {
    /// Succeed at `cursor` without consuming, with a trivial latent message
    pub fn empty(value: T, cursor: TextCursor<'code>) -> Self {
        Outcome::EmptySuccess {
            value,
            cursor,
            message: Message::at(cursor.offset()),
        }
    }

    /// Fail without consuming
    pub fn unconsumed(message: Message) -> Self {
        Outcome::Failure {
            message,
            consumed: false,
        }
    }

    /// Transform the value, leaving consumption and messages alone
    pub fn map<U, F>(self, f: F) -> Outcome<'code, U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success { value, cursor } => Outcome::Success {
                value: f(value),
                cursor,
            },
            Outcome::EmptySuccess {
                value,
                cursor,
                message,
            } => Outcome::EmptySuccess {
                value: f(value),
                cursor,
                message,
            },
            Outcome::Failure { message, consumed } => Outcome::Failure { message, consumed },
        }
    }

    /// Whether the parse that produced this outcome advanced the cursor
    pub fn is_consumed(&self) -> bool {
        match self {
            Outcome::Success { .. } => true,
            Outcome::EmptySuccess { .. } => false,
            Outcome::Failure { consumed, .. } => *consumed,
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::Failure { .. })
    }

    /// The diagnostic carried by an empty success or a failure
    pub fn message(&self) -> Option<&Message> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::EmptySuccess { message, .. } | Outcome::Failure { message, .. } => {
                Some(message)
            }
        }
    }

    /// Forget the consumed bit and latent diagnostics
    pub fn into_result(self) -> Result<(T, TextCursor<'code>), Message> {
        match self {
            Outcome::Success { value, cursor } | Outcome::EmptySuccess { value, cursor, .. } => {
                Ok((value, cursor))
            }
            Outcome::Failure { message, .. } => Err(message),
        }
    }
}
