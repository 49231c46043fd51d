//! Single-note grammar: heads, modifiers and holds.

use pretty_assertions::assert_eq;
use simai_rs::simai::prelude::*;

use super::{assert_close, single_note};

#[test]
fn tap_styles() {
    let note = single_note("5bx,");
    assert_eq!(note.kind(), NoteKind::Tap);
    assert_eq!(
        *note.style(),
        NoteStyle {
            is_break: true,
            is_ex: true,
            ..NoteStyle::default()
        }
    );
    assert_eq!(note.source_text(), "5bx");
}

#[test]
fn star_taps() {
    let star = single_note("4$,");
    assert!(star.style().is_star_tap);
    assert!(!star.style().is_fake_rotate);

    let rotating = single_note("4$$,");
    assert!(rotating.style().is_star_tap);
    assert!(rotating.style().is_fake_rotate);
}

#[test]
fn pseudo_hold_is_short_but_positive() {
    let note = single_note("1h,");
    assert_eq!(note.kind(), NoteKind::Hold);
    let duration = note.hold_duration_secs().unwrap_or_default();
    assert!(duration > 0.0);
    assert_close(duration, beat_fraction_secs(120.0, 1280.0, 1.0));
}

#[test]
fn pseudo_hold_follows_tempo_and_config() {
    let note = single_note("(60)1h,");
    assert_close(
        note.hold_duration_secs().unwrap_or_default(),
        beat_fraction_secs(60.0, 1280.0, 1.0),
    );

    let config = ParseConfig::default().with_pseudo_hold_divisor(16);
    let SimaiOutput { timing_points, .. } = parse_simai_with_config("1h,", 0.0, &config);
    assert_close(
        timing_points[0].notes[0].hold_duration_secs().unwrap_or_default(),
        0.125,
    );
}

#[test]
fn hold_with_every_bracket_form() {
    let cases = [
        ("2h[4:1],", 0.5),
        ("2h[2:3],", 3.0),
        ("2h[#2.5],", 2.5),
        ("2h[240#4:1],", 0.25),
        ("2h[1.5],", 1.5),
    ];
    for (source, expected) in cases {
        let note = single_note(source);
        assert_eq!(note.kind(), NoteKind::Hold, "{source}");
        assert_close(note.hold_duration_secs().unwrap_or_default(), expected);
    }
}

#[test]
fn hold_modifiers_in_any_order() {
    for source in ["3bh[4:1],", "3hb[4:1],", "3h[4:1]b,"] {
        let note = single_note(source);
        assert_eq!(note.kind(), NoteKind::Hold, "{source}");
        assert!(note.style().is_break, "{source}");
        assert_close(note.hold_duration_secs().unwrap_or_default(), 0.5);
    }
}

#[test]
fn touch_notes() {
    let note = single_note("B3,");
    assert_eq!(note.kind(), NoteKind::Touch);
    assert_eq!(note.touch_area(), Some(TouchArea::B));
    assert_eq!(note.position(), 3);

    let center = single_note("C,");
    assert_eq!(center.touch_area(), Some(TouchArea::C));
    assert_eq!(center.position(), 0);

    let fireworks = single_note("E8f,");
    assert!(fireworks.style().is_fireworks);
    assert_eq!(fireworks.touch_area(), Some(TouchArea::E));
}

#[test]
fn touch_holds() {
    let note = single_note("Chf[2:1],");
    assert_eq!(note.kind(), NoteKind::TouchHold);
    assert!(note.style().is_fireworks);
    assert_close(note.hold_duration_secs().unwrap_or_default(), 1.0);

    let pseudo = single_note("A1h,");
    assert_eq!(pseudo.kind(), NoteKind::TouchHold);
    assert!(pseudo.hold_duration_secs().unwrap_or_default() > 0.0);
}

#[test]
fn button_variants_have_no_area() {
    for source in ["1,", "1h,", "1-5[8:1],"] {
        assert_eq!(single_note(source).touch_area(), None, "{source}");
    }
}
