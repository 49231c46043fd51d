//! Malformed text never stops the parse.

use pretty_assertions::assert_eq;
use simai_rs::simai::prelude::*;

fn parse_warnings(source: &str) -> (Vec<TimingPoint>, Vec<ParseWarning>) {
    let SimaiOutput {
        timing_points,
        warnings,
    } = parse_simai(source, 0.0);
    let warnings = warnings
        .into_iter()
        .map(|warning| match warning {
            SimaiWarning::ParseWarning(warning) => warning.into_content(),
            other => panic!("unexpected warning {other:?}"),
        })
        .collect();
    (timing_points, warnings)
}

#[test]
fn malformed_tempo_keeps_previous() {
    let (points, warnings) = parse_warnings("(150)1,(abc)2,3,");
    assert_eq!(
        warnings,
        vec![ParseWarning::MalformedNumericLiteral {
            site: NumericSite::Tempo,
            literal: "abc".into(),
        }]
    );
    let bpms: Vec<_> = points.iter().map(|point| point.bpm).collect();
    assert_eq!(bpms, vec![150.0; 3]);
}

#[test]
fn zero_division_keeps_previous() {
    let (points, warnings) = parse_warnings("(120){8}1,{0}2,3,");
    assert_eq!(warnings.len(), 1);
    assert_eq!(points[2].time_secs, 0.5);
}

#[test]
fn malformed_bracket_falls_back() {
    let (points, warnings) = parse_warnings("1-5[x:3],2h[abc],");
    assert_eq!(
        warnings,
        vec![
            ParseWarning::MalformedNumericLiteral {
                site: NumericSite::BeatDivisor,
                literal: "x".into(),
            },
            ParseWarning::MalformedNumericLiteral {
                site: NumericSite::Duration,
                literal: "abc".into(),
            },
        ]
    );
    let slide = points[0].notes[0].as_slide().map(|slide| slide.tracks[0]);
    assert_eq!(slide.map(|track| track.duration_secs), Some(0.0));
    assert_eq!(slide.map(|track| track.wait_secs), Some(0.5));
    let hold = points[1].notes[0].hold_duration_secs().unwrap_or_default();
    assert_eq!(hold, beat_fraction_secs(120.0, 1280.0, 1.0));
}

#[test]
fn unterminated_bracket_takes_the_rest() {
    let (points, warnings) = parse_warnings("1-5[8:3,2,");
    assert_eq!(warnings, vec![ParseWarning::UnterminatedBracket]);
    let track = points[0].notes[0].as_slide().map(|slide| slide.tracks[0]);
    assert_eq!(track.map(|track| track.duration_secs), Some(0.75));
    assert_eq!(points.len(), 2);
}

#[test]
fn invalid_note_is_skipped() {
    let (points, warnings) = parse_warnings("1/9h/2,");
    assert_eq!(warnings, vec![ParseWarning::InvalidNoteHead("9h".into())]);
    assert_eq!(points[0].each_text(), "1/2");
}

#[test]
fn bad_head_is_dropped_alike_alone_and_in_each() {
    let (points, warnings) = parse_warnings("9-5[8:3],2,");
    assert_eq!(warnings, vec![ParseWarning::InvalidNoteHead("9-5[8:3]".into())]);
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].each_text(), "2");
    assert_eq!(points[0].time_secs, 0.5);

    let (points, warnings) = parse_warnings("1/9-5[8:3],");
    assert_eq!(warnings, vec![ParseWarning::InvalidNoteHead("9-5[8:3]".into())]);
    assert_eq!(points[0].each_text(), "1");
}

#[test]
fn sensor_index_above_eight_is_reported() {
    let (points, warnings) = parse_warnings("B12,");
    assert_eq!(
        warnings,
        vec![ParseWarning::SensorIndexOutOfRange {
            area: 'B',
            index: 12
        }]
    );
    assert_eq!(points[0].notes[0].position(), 12);
}

#[test]
fn slide_without_destination_becomes_tap() {
    let (points, warnings) = parse_warnings("3-[4:1],");
    assert_eq!(warnings, vec![ParseWarning::MissingSlideDestination]);
    assert_eq!(points[0].notes[0].kind(), NoteKind::Tap);
    assert_eq!(points[0].notes[0].position(), 3);
}

#[test]
fn unknown_modifier_is_ignored() {
    let (points, warnings) = parse_warnings("4k,");
    assert_eq!(warnings, vec![ParseWarning::UnknownModifier('k')]);
    assert_eq!(points[0].notes[0].kind(), NoteKind::Tap);
}

#[test]
fn lex_warnings_come_first_with_positions() {
    let source = "1,(fast)2,#3,";
    let SimaiOutput { warnings, .. } = parse_simai(source, 0.0);
    let spans: Vec<_> = warnings.iter().map(|warning| &source[warning.range()]).collect();
    assert_eq!(spans, vec!["#", "(fast)"]);
    assert!(matches!(warnings[0], SimaiWarning::LexWarning(_)));
}
