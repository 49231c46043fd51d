//! Reading a whole maidata file.

use pretty_assertions::assert_eq;
use simai_rs::{
    maidata::{MaidataOutput, parse_maidata},
    simai::prelude::*,
};

use super::assert_close;

const SAMPLE: &str = include_str!("files/sample_maidata.txt");

#[test]
fn sample_metadata() {
    let MaidataOutput { chart, warnings } = parse_maidata(SAMPLE);
    assert_eq!(warnings, vec![]);

    let metadata = &chart.metadata;
    assert_eq!(metadata.title, "Sample Song");
    assert_eq!(metadata.artist, "Sample Artist");
    assert_eq!(metadata.designer, "Sample Designer");
    assert_eq!(metadata.first_beat_offset_secs, 1.25);
    assert_eq!(metadata.level(Difficulty::Basic), Some("5"));
    assert_eq!(metadata.level(Difficulty::Master), Some("12+"));
    assert_eq!(metadata.level(Difficulty::Easy), None);
    assert_eq!(
        metadata.other_commands,
        vec![
            ("wholebpm".to_owned(), "150".to_owned()),
            ("demo_seek".to_owned(), "30".to_owned()),
        ]
    );
    assert_eq!(
        chart.difficulties.keys().copied().collect::<Vec<_>>(),
        vec![Difficulty::Basic, Difficulty::Master]
    );
}

#[test]
fn sample_basic_chart() {
    let MaidataOutput { chart, .. } = parse_maidata(SAMPLE);
    let basic = chart.track(Difficulty::Basic).unwrap_or_default();
    let texts: Vec<_> = basic.iter().map(TimingPoint::each_text).collect();
    assert_eq!(
        texts,
        vec!["1", "2", "3", "4", "5/6", "7/8", "1h[4:1]"]
    );
    assert_close(basic[0].time_secs, 1.25);
    assert_close(basic[4].time_secs, 1.25 + 4.0 * 0.4);
    assert_close(basic[6].time_secs, 1.25 + 7.0 * 0.4);
    assert_close(basic[6].notes[0].hold_duration_secs().unwrap_or_default(), 0.4);
}

#[test]
fn sample_master_chart() {
    let MaidataOutput { chart, .. } = parse_maidata(SAMPLE);
    let master = chart.track(Difficulty::Master).unwrap_or_default();
    let kinds: Vec<Vec<NoteKind>> = master
        .iter()
        .map(|point| point.notes.iter().map(NoteEvent::kind).collect())
        .collect();
    assert_eq!(
        kinds,
        vec![
            vec![NoteKind::Slide],
            vec![NoteKind::Tap, NoteKind::Tap],
            vec![NoteKind::Touch],
            vec![NoteKind::Touch],
            vec![NoteKind::Touch],
            vec![NoteKind::Touch],
            vec![NoteKind::TouchHold],
            vec![NoteKind::Slide],
            vec![NoteKind::Slide],
            vec![NoteKind::TouchHold],
        ]
    );

    let chain = master[7].notes[0].as_slide().map(Slide::split_tracks);
    assert_eq!(chain.as_ref().map(Vec::len), Some(2));

    let fade = master[8].notes[0].as_slide().map(|slide| (slide.is_fade_in, slide.tracks[0]));
    let (is_fade_in, track) = fade.unwrap_or_else(|| panic!("expected slide"));
    assert!(is_fade_in);
    assert_eq!(track.shape, SlideShape::ViaCenter);
    assert_close(track.duration_secs, 1.6);
    assert_close(track.wait_secs, 0.8);
    assert_eq!(master[8].bpm, 75.0);
}

#[test]
fn every_difficulty_uses_the_same_offset() {
    let MaidataOutput { chart, .. } = parse_maidata(SAMPLE);
    for track in chart.difficulties.values() {
        assert_close(track[0].time_secs, 1.25);
    }
}
