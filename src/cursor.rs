/// Immutable position into a string being parsed
///
/// A cursor is a cheap `Copy` value. Advancing produces a new cursor and never
/// touches the old one, so parsers can hold on to earlier positions freely
/// for backtracking.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextCursor<'code> {
    /// Cursor pointing at a character
    Valid {
        text: &'code str,
        /// Byte offset of the current character (always on a char boundary)
        position: usize,
        /// Characters from `position` to the end, the current one included
        remaining: usize,
    },
    /// Cursor past the last character - nothing left to read
    EndOfInput { text: &'code str },
}

impl<'code> TextCursor<'code> {
    pub fn new(text: &'code str) -> Self {
        if text.is_empty() {
            return TextCursor::EndOfInput { text };
        }
        TextCursor::Valid {
            text,
            position: 0,
            remaining: text.chars().count(),
        }
    }

    /// Whether there is a character under the cursor
    pub fn has_next(&self) -> bool {
        matches!(self, TextCursor::Valid { .. })
    }

    /// Peek at the current character without advancing
    pub fn current(&self) -> Option<char> {
        match self {
            TextCursor::Valid { text, position, .. } => text[*position..].chars().next(),
            TextCursor::EndOfInput { .. } => None,
        }
    }

    /// Move past the current character
    ///
    /// At end of input this returns the end cursor again.
    pub fn advance(self) -> Self {
        match self {
            TextCursor::Valid {
                text,
                position,
                remaining,
            } => {
                let width = text[position..].chars().next().map_or(1, char::len_utf8);
                let next = position + width;
                if next >= text.len() {
                    TextCursor::EndOfInput { text }
                } else {
                    TextCursor::Valid {
                        text,
                        position: next,
                        remaining: remaining - 1,
                    }
                }
            }
            TextCursor::EndOfInput { text } => TextCursor::EndOfInput { text },
        }
    }

    /// Number of characters (code points) left to read
    ///
    /// Counted once when the cursor is created and kept up to date by
    /// [`advance`](Self::advance), so this is constant time.
    pub fn remaining_count(&self) -> usize {
        match self {
            TextCursor::Valid { remaining, .. } => *remaining,
            TextCursor::EndOfInput { .. } => 0,
        }
    }

    /// Byte offset of the cursor in the source; the source length at end of input
    pub fn offset(&self) -> usize {
        match self {
            TextCursor::Valid { position, .. } => *position,
            TextCursor::EndOfInput { text } => text.len(),
        }
    }

    /// The whole source the cursor walks over
    pub fn source(&self) -> &'code str {
        match self {
            TextCursor::Valid { text, .. } => text,
            TextCursor::EndOfInput { text } => text,
        }
    }

    /// The unread part of the source
    pub fn rest(&self) -> &'code str {
        &self.source()[self.offset()..]
    }

    /// Slice of the source between this cursor and a later one
    pub(crate) fn slice_to(&self, later: &TextCursor<'code>) -> &'code str {
        &self.source()[self.offset()..later.offset()]
    }

    /// Line and column of `offset` in this cursor's source, both 1-based
    pub fn line_column(&self, offset: usize) -> (usize, usize) {
        line_column(self.source(), offset)
    }
}

/// Decode a byte offset into a 1-based (line, column) pair
///
/// Columns count characters, not bytes. Offsets past the end of `text` are
/// clamped to the end.
pub fn line_column(text: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;

    for (i, ch) in text.char_indices() {
        if i >= offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }

    (line, column)
}
