//! Definitions of the top-level tokens in simai chart text.

use super::{LexWarningWithRange, cursor::Cursor};
use crate::simai::mixin::{SourceRangeMixin, SourceRangeMixinExt};

/// Chars which begin a note-group. Any letter or digit does, so that a malformed head such as
/// `9` or `F` reaches the note grammar as a whole and is rejected there.
pub(crate) const fn is_note_start(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// A token content of simai chart text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[non_exhaustive]
pub enum Token<'a> {
    /// `(120)`. Sets the tempo. The literal is kept raw and resolved while parsing.
    Tempo(&'a str),
    /// `{4}` or `{#0.25}`. Sets the beat subdivision of following `,`.
    Division(&'a str),
    /// `,`. Advances the time by one tick of the current subdivision.
    Advance,
    /// Text from a letter or digit until the next `,`, line terminator, comment or end of input.
    NoteGroup(&'a str),
    /// The end marker `E` standing alone at the end of a line.
    End,
}

/// A token with position information.
pub type TokenWithRange<'a> = SourceRangeMixin<Token<'a>>;

impl<'a> Token<'a> {
    /// Parses one token at the cursor, which must stand on a non-trivia char.
    ///
    /// Returns `Ok(None)` if only trivia remained.
    pub(crate) fn parse(
        c: &mut Cursor<'a>,
        warnings: &mut Vec<LexWarningWithRange>,
    ) -> Result<Option<TokenWithRange<'a>>, LexWarningWithRange> {
        skip_trivia(c);
        let start = c.index();
        let Some(head) = c.peek_char() else {
            return Ok(None);
        };
        let token = match head {
            '(' => Self::Tempo(directive_literal(c, ')', warnings)),
            '{' => Self::Division(directive_literal(c, '}', warnings)),
            ',' => {
                c.next_char();
                Self::Advance
            }
            'E' if is_end_marker(c) => {
                c.next_char();
                Self::End
            }
            head if is_note_start(head) => Self::NoteGroup(take_note_group(c)),
            other => {
                c.next_char();
                return Err(c.make_err_unexpected_char(other, start));
            }
        };
        let end = match token {
            Self::NoteGroup(group) => start + group.len(),
            _ => c.index(),
        };
        Ok(Some(token.into_wrapper_range(start..end)))
    }
}

/// Whether the `E` at the cursor stands alone before a line terminator or the end of input.
fn is_end_marker(c: &mut Cursor<'_>) -> bool {
    let checkpoint = c.save_checkpoint();
    c.next_char();
    let is_end = c.at_line_end();
    c.restore_checkpoint(checkpoint);
    is_end
}

/// Skips whitespace, line terminators and `||` comments.
fn skip_trivia(c: &mut Cursor<'_>) {
    loop {
        if c.starts_with("||") {
            c.skip_line();
        } else if c.peek_char().is_some_and(char::is_whitespace) {
            c.next_char();
        } else {
            break;
        }
    }
}

/// Reads the literal between an opening bracket and `closer`.
///
/// An unterminated directive takes the rest of the input as its literal.
fn directive_literal<'a>(
    c: &mut Cursor<'a>,
    closer: char,
    warnings: &mut Vec<LexWarningWithRange>,
) -> &'a str {
    let start = c.index();
    c.next_char();
    let (_, literal) = c.take_while(|ch| ch != closer);
    if c.next_char().is_none() {
        warnings.push(c.make_err_unterminated(closer, start));
    }
    literal
}

/// Takes a note-group, excluding a trailing carriage return.
fn take_note_group<'a>(c: &mut Cursor<'a>) -> &'a str {
    let start = c.index();
    while let Some(ch) = c.peek_char() {
        if ch == ',' || ch == '\n' || c.starts_with("||") {
            break;
        }
        c.next_char();
    }
    c.slice_from(start).trim_end()
}
