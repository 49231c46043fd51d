//! Lexical analyzer of simai chart text.
//!
//! Raw [String] == [lex] ==> [`TokenWithRange`]s (in [`LexOutput`]) == [parse] ==> [`TimingPoint`]s
//! (in [`ParseOutput`])
//!
//! The lexer only splits the text into directives, advances and note-groups. Numbers in
//! directives are kept as raw literals, and the contents of note-groups are left to the note
//! grammar in [`crate::simai::parse`].
//!
//! [parse]: crate::simai::parse
//! [`TimingPoint`]: crate::simai::model::TimingPoint
//! [`ParseOutput`]: crate::simai::parse::ParseOutput

pub mod cursor;
pub mod token;

use thiserror::Error;

use self::{
    cursor::Cursor,
    token::{Token, TokenWithRange},
};
use super::mixin::SourceRangeMixin;

/// A warning occurred when lexical analysis.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LexWarning {
    /// A `(` or `{` was not closed before the end of input.
    #[error("unterminated directive, expected `{closer}` before the end of input")]
    UnterminatedDirective {
        /// The closing char expected.
        closer: char,
    },
    /// The char can not begin any token and was skipped.
    #[error("unexpected character `{0}`")]
    UnexpectedCharacter(char),
}

/// A lex warning with position information.
pub type LexWarningWithRange = SourceRangeMixin<LexWarning>;

/// Lex Parsing Results, includes tokens and warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LexOutput<'a> {
    /// tokens
    pub tokens: Vec<TokenWithRange<'a>>,
    /// warnings
    pub lex_warnings: Vec<LexWarningWithRange>,
}

/// Analyzes and converts the simai chart text into tokens.
pub fn parse_lex(source: &str) -> LexOutput<'_> {
    let mut cursor = Cursor::new(source);

    let mut tokens = vec![];
    let mut warnings = vec![];
    loop {
        let (line, col) = cursor.position();
        match Token::parse(&mut cursor, &mut warnings) {
            Ok(Some(token)) => tokens.push(token),
            Ok(None) => break,
            Err(warning) => {
                log::trace!("skipped at {line}:{col}: {warning}");
                warnings.push(warning);
            }
        }
    }
    LexOutput {
        tokens,
        lex_warnings: warnings,
    }
}
