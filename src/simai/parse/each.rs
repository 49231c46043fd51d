//! Splitting a note group into simultaneous notes.
//!
//! A group with a `/` outside of timing brackets is an EACH and splits on every top-level `/`,
//! whitespace and backtick. Any other group splits on top-level backticks only (pseudo-EACH).

use super::{WarningSink, note, timing::TimingContext};
use crate::simai::{config::ParseConfig, model::note::NoteEvent};

/// Resolves the notes of `group`, which starts at byte `offset` of the source.
pub(crate) fn parse_group(
    group: &str,
    offset: usize,
    ctx: &TimingContext,
    config: &ParseConfig,
    sink: &mut WarningSink,
) -> Vec<NoteEvent> {
    let is_each = top_level(group).any(|(_, c)| c == '/');
    let is_separator = move |c: char| c == '`' || (is_each && (c == '/' || c.is_whitespace()));
    segments(group, is_separator)
        .filter_map(|(start, text)| note::parse_note(text, offset + start, ctx.bpm(), config, sink))
        .collect()
}

/// Chars of `group` outside of `[...]`, with their byte index.
fn top_level(group: &str) -> impl Iterator<Item = (usize, char)> + '_ {
    let mut depth = 0usize;
    group.char_indices().filter(move |&(_, c)| {
        let was_top = depth == 0;
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            _ => {}
        }
        was_top && c != '['
    })
}

/// Non-empty trimmed pieces of `group` between top-level separators, with their byte index.
fn segments(
    group: &str,
    is_separator: impl Fn(char) -> bool,
) -> impl Iterator<Item = (usize, &str)> {
    let mut bounds: Vec<_> = top_level(group)
        .filter(|&(_, c)| is_separator(c))
        .map(|(i, c)| (i, i + c.len_utf8()))
        .collect();
    bounds.push((group.len(), group.len()));
    let mut start = 0;
    bounds.into_iter().filter_map(move |(end, next)| {
        let raw = &group[start..end];
        let piece_start = start;
        start = next;
        let trimmed = raw.trim_start();
        let lead = raw.len() - trimmed.len();
        let trimmed = trimmed.trim_end();
        (!trimmed.is_empty()).then_some((piece_start + lead, trimmed))
    })
}
