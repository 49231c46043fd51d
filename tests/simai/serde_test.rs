//! Serialization of parsed charts.

use pretty_assertions::assert_eq;
use simai_rs::{
    maidata::{MaidataOutput, parse_maidata},
    simai::{SimaiOutput, model::TimingPoint, parse_simai},
};

#[test]
fn chart_survives_json() {
    let MaidataOutput { chart, .. } = parse_maidata(include_str!("files/sample_maidata.txt"));
    let json = serde_json::to_string(&chart).expect("serialize");
    let back = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(chart, back);
}

#[test]
fn times_survive_json_exactly() {
    let SimaiOutput { timing_points, .. } = parse_simai("(150){8}1,2,{#0.3}3,", 1.85);
    let json = serde_json::to_string(&timing_points).expect("serialize");
    let back: Vec<TimingPoint> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back[0].time_secs, 1.85);
    assert_eq!(timing_points, back);
}

#[test]
fn warnings_serialize_with_positions() {
    let SimaiOutput { warnings, .. } = parse_simai("(fast)1,", 0.0);
    let json = serde_json::to_value(&warnings).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!([{
            "ParseWarning": {
                "content": {
                    "MalformedNumericLiteral": { "site": "Tempo", "literal": "fast" }
                },
                "start": 0,
                "end": 6
            }
        }])
    );
}
