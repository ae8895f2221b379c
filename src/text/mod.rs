//! Character-level recognizers built directly on [`TextCursor`]

use crate::cursor::TextCursor;
use crate::error::Message;

pub mod character;
pub mod number;
pub mod string;
pub mod take;
pub mod whitespace;

pub use character::{alpha, any, char, digit, lower, satisfy, upper};
pub use number::number;
pub use string::literal;
pub use take::{skip_while, skip_while1, take, take_until, take_while, take_while1};
pub use whitespace::{is_whitespace, lexeme, whitespace};

pub(crate) const END_OF_INPUT: &str = "end of input";

/// Message describing whatever is under the cursor
pub(crate) fn unexpected_here(cursor: &TextCursor<'_>) -> Message {
    let message = Message::at(cursor.offset());
    match cursor.current() {
        Some(ch) => message.with_unexpected(format!("{:?}", ch)),
        None => message.with_unexpected(END_OF_INPUT),
    }
}
