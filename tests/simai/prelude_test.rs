//! The prelude brings the whole parsing pipeline into scope.

use pretty_assertions::assert_eq;
use simai_rs::simai::prelude::*;

#[test]
fn pipeline_by_hand() {
    let source = "(120){4}1,2-6[8:3],";
    let LexOutput {
        tokens,
        lex_warnings,
    } = simai_rs::simai::lex::parse_lex(source);
    assert_eq!(lex_warnings, vec![]);
    assert_eq!(tokens[0].content(), &Token::Tempo("120"));

    let ParseOutput {
        timing_points,
        parse_warnings,
    } = simai_rs::simai::parse::parse_tokens(&tokens, 0.0, &ParseConfig::default());
    assert_eq!(parse_warnings, vec![]);
    assert_eq!(timing_points, parse_difficulty_track(source, 0.0));
}

#[test]
fn note_lexemes_carry_source_positions() {
    let lexemes = lex_note("2h[4:1]", 5);
    let ranges: Vec<_> = lexemes.iter().map(SourceRangeMixin::range).collect();
    assert_eq!(ranges, vec![5..6, 6..7, 7..12]);
    assert_eq!(lexemes[1].content(), &NoteLexeme::Modifier(Modifier::Hold));
}

#[test]
fn timing_context_ticks() {
    let mut ctx = TimingContext::new(&ParseConfig::default(), 1.0);
    assert_eq!(ctx.division(), Division::Beats(DEFAULT_DIVISION));
    assert_eq!(ctx.one_beat_secs(), 0.5);
    ctx.advance();
    assert_eq!(ctx.elapsed_secs(), 1.5);
}
