//! Tempo, division and placement of timing points.

use pretty_assertions::assert_eq;
use simai_rs::simai::prelude::*;

use super::{assert_close, parse_clean};

fn times(points: &[TimingPoint]) -> Vec<f64> {
    points.iter().map(|point| point.time_secs).collect()
}

#[test]
fn quarter_notes_at_120() {
    let points = parse_clean("(120){4}1,2,3,4,");
    assert_eq!(times(&points), vec![0.0, 0.5, 1.0, 1.5]);
    let positions: Vec<_> = points
        .iter()
        .map(|point| {
            assert_eq!(point.notes.len(), 1);
            assert_eq!(point.notes[0].kind(), NoteKind::Tap);
            point.notes[0].position()
        })
        .collect();
    assert_eq!(positions, vec![1, 2, 3, 4]);
}

#[test]
fn defaults_without_directives() {
    let points = parse_clean("1,2,");
    assert_eq!(times(&points), vec![0.0, 0.5]);
    assert_eq!(points[0].bpm, DEFAULT_BPM);
}

#[test]
fn first_beat_offset_shifts_everything() {
    let points = parse_difficulty_track("(120)1,,2,", 2.25);
    assert_eq!(times(&points), vec![2.25, 3.25]);
}

#[test]
fn division_scales_the_tick() {
    let points = parse_clean("(120){8}1,2,{16}3,4,{1}5,6,");
    let expected = [0.0, 0.25, 0.5, 0.625, 0.75, 2.75];
    for (point, expected) in points.iter().zip(expected) {
        assert_close(point.time_secs, expected);
    }
}

#[test]
fn tempo_change_applies_from_next_tick() {
    let points = parse_clean("(60){4}1,(120)2,3,");
    assert_eq!(times(&points), vec![0.0, 1.0, 1.5]);
    let bpms: Vec<_> = points.iter().map(|point| point.bpm).collect();
    assert_eq!(bpms, vec![60.0, 120.0, 120.0]);
}

#[test]
fn absolute_division_ignores_tempo() {
    let points = parse_clean("(200){#0.25}1,2,(60)3,{4}4,");
    assert_eq!(times(&points), vec![0.0, 0.25, 0.5, 0.75]);
}

#[test]
fn times_never_decrease() {
    let points = parse_clean("(180){8}1,2,,3/4,{32}5,,,,6,(90)7,,E");
    assert!(points.windows(2).all(|pair| pair[0].time_secs < pair[1].time_secs));
}

#[test]
fn groups_without_advance_merge() {
    let points = parse_clean("1\n2,3`4\n5,");
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].each_text(), "1/2");
    assert_eq!(points[1].each_text(), "3/4/5");
}

#[test]
fn comments_and_end_marker() {
    let points = parse_clean("|| intro\n(150){4}\n1,|| first\n2,\nE\n");
    assert_eq!(points.len(), 2);
    assert_close(points[1].time_secs, 0.4);
}

#[test]
fn end_marker_does_not_stop_the_track() {
    let points = parse_clean("1,E\n2,");
    assert_eq!(times(&points), vec![0.0, 0.5]);
}

#[test]
fn empty_track() {
    assert_eq!(parse_clean(""), vec![]);
    assert_eq!(parse_clean("(120){4},,,,E"), vec![]);
}

#[test]
fn custom_initial_state() {
    let config = ParseConfig::default()
        .with_initial_bpm(60.0)
        .with_initial_division(8);
    let SimaiOutput { timing_points, .. } = parse_simai_with_config("1,2,", 0.0, &config);
    assert_eq!(times(&timing_points), vec![0.0, 0.5]);
}

#[test]
fn same_text_parses_the_same_every_time() {
    const SRC: &str = "(150){8}1-4[4:3]*-6[8:5]b,2h,3`4,A1/Ch[2:1],{#0.3}5,";
    let first = parse_simai(SRC, 0.7);
    assert_eq!(first.warnings, vec![]);
    for _ in 0..3 {
        assert_eq!(parse_simai(SRC, 0.7), first);
    }
}
