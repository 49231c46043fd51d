//! Character cursor over simai chart text.

use std::ops::Range;

use super::{LexWarning, LexWarningWithRange};
use crate::simai::mixin::SourceRangeMixinExt;

/// Represents a checkpoint state of the cursor that can be saved and restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorCheckpoint {
    /// The line position, starts with 1.
    pub line: usize,
    /// The column position of char count, starts with 1. It is NOT byte count.
    pub col: usize,
    /// The index position.
    pub index: usize,
}

/// Walks the chart text char by char, keeping the byte index and the line/column for diagnostics.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The line position, starts with 1.
    line: usize,
    /// The column position of char count, starts with 1. It is NOT byte count.
    col: usize,
    /// The index position.
    index: usize,
    /// The source str.
    source: &'a str,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self {
            line: 1,
            col: 1,
            index: 0,
            source,
        }
    }

    /// Whether all of the source was consumed.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.index >= self.source.len()
    }

    /// Returns the current byte index in the source string.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The current (line, column) pair, both starting with 1.
    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        (self.line, self.col)
    }

    /// The not yet consumed part of the source.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.source[self.index..]
    }

    /// The text between `start` and the current index.
    #[must_use]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.index]
    }

    /// Peeks the next char without moving.
    #[must_use]
    pub fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Whether the not yet consumed part starts with `pat`.
    #[must_use]
    pub fn starts_with(&self, pat: &str) -> bool {
        self.rest().starts_with(pat)
    }

    /// Moves through one char and returns it.
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.index += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    /// Moves through chars while `pred` holds, returns the range and the text passed over.
    pub fn take_while(&mut self, mut pred: impl FnMut(char) -> bool) -> (Range<usize>, &'a str) {
        let start = self.index;
        while self.peek_char().is_some_and(&mut pred) {
            self.next_char();
        }
        (start..self.index, &self.source[start..self.index])
    }

    /// Moves through the rest of this line, leaving the line feed unconsumed.
    pub fn skip_line(&mut self) {
        self.take_while(|c| c != '\n');
    }

    /// Whether the cursor stands on a line terminator (`\n` or `\r\n`) or the end of input.
    #[must_use]
    pub fn at_line_end(&self) -> bool {
        let rest = self.rest();
        rest.is_empty() || rest.starts_with('\n') || rest.starts_with("\r\n")
    }

    /// Save the current cursor state as a checkpoint.
    #[must_use]
    pub const fn save_checkpoint(&self) -> CursorCheckpoint {
        CursorCheckpoint {
            line: self.line,
            col: self.col,
            index: self.index,
        }
    }

    /// Restore the cursor state from a checkpoint.
    pub const fn restore_checkpoint(&mut self, checkpoint: CursorCheckpoint) {
        self.line = checkpoint.line;
        self.col = checkpoint.col;
        self.index = checkpoint.index;
    }

    pub(crate) fn make_err_unexpected_char(&self, c: char, start: usize) -> LexWarningWithRange {
        LexWarning::UnexpectedCharacter(c).into_wrapper_range(start..self.index)
    }

    pub(crate) fn make_err_unterminated(&self, closer: char, start: usize) -> LexWarningWithRange {
        LexWarning::UnterminatedDirective { closer }.into_wrapper_range(start..self.index)
    }
}
