//! EACH and pseudo-EACH groups.

use pretty_assertions::assert_eq;
use simai_rs::simai::prelude::*;

use super::parse_clean;

fn positions(point: &TimingPoint) -> Vec<u8> {
    point.notes.iter().map(NoteEvent::position).collect()
}

#[test]
fn each_and_pseudo_each_share_one_point() {
    let each = parse_clean("1/2,");
    assert_eq!(each.len(), 1);
    assert_eq!(positions(&each[0]), vec![1, 2]);
    assert_eq!(parse_clean("1`2,"), each);
}

#[test]
fn each_of_mixed_kinds() {
    let points = parse_clean("1/8h[2:1]/C/3-7[8:3],");
    let kinds: Vec<_> = points[0].notes.iter().map(NoteEvent::kind).collect();
    assert_eq!(
        kinds,
        vec![NoteKind::Tap, NoteKind::Hold, NoteKind::Touch, NoteKind::Slide]
    );
    assert_eq!(points[0].each_text(), "1/8h[2:1]/C/3-7[8:3]");
}

#[test]
fn slash_in_bracket_does_not_split() {
    let SimaiOutput {
        timing_points,
        warnings,
    } = parse_simai("1-5[3##1/2],", 0.0);
    assert_eq!(timing_points[0].notes.len(), 1);
    assert_eq!(warnings.len(), 1);
}

#[test]
fn pseudo_each_slides_keep_their_brackets() {
    let points = parse_clean("1-5[8:3]`2-6[8:3]`3,");
    assert_eq!(positions(&points[0]), vec![1, 2, 3]);
    assert_eq!(points[0].notes[1].source_text(), "2-6[8:3]");
}

#[test]
fn spaces_inside_each() {
    let points = parse_clean("1 / 2h[4:1] / B4,");
    assert_eq!(points[0].each_text(), "1/2h[4:1]/B4");
}
