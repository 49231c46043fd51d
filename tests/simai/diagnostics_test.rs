//! Test diagnostics module functionality

#![cfg(feature = "diagnostics")]

use simai_rs::{
    diagnostics::{
        SimpleSource, ToAriadne, collect_reports, emit_maidata_warnings, emit_simai_warnings,
    },
    maidata::parse_maidata,
    simai::{SimaiWarning, parse_simai},
};

#[test]
fn test_simple_source_creation() {
    let source_text = "&title=Test\n&inote_1=1,2,\n";
    let source = SimpleSource::new("maidata.txt", source_text);

    assert_eq!(source.text(), source_text);
    assert_eq!(source.name(), "maidata.txt");
}

#[test]
fn test_reports_for_every_warning() {
    let source = "(fast)1,#2,3-[4:1],4h[8:,";
    let output = parse_simai(source, 0.0);
    assert_eq!(output.warnings.len(), 4);

    let reports = collect_reports("inote_1", source, &output.warnings);
    assert_eq!(reports.len(), output.warnings.len());

    let simple = SimpleSource::new("inote_1", source);
    for warning in &output.warnings {
        let mut rendered = Vec::new();
        warning
            .to_report(&simple)
            .write(
                ("inote_1".to_string(), ariadne::Source::from(source)),
                &mut rendered,
            )
            .expect("report renders");
        assert!(!rendered.is_empty());
    }

    emit_simai_warnings("inote_1", source, &output.warnings);
}

#[test]
fn test_empty_warnings() {
    let empty_warnings: Vec<SimaiWarning> = vec![];
    emit_simai_warnings("inote_1", "1,2,", &empty_warnings);
}

#[test]
fn test_maidata_warnings_point_into_file() {
    let source = "&first=later\n&inote_3=1,(x)2,\n&lv_9=1\n";
    let output = parse_maidata(source);
    let spans: Vec<_> = output
        .warnings
        .iter()
        .map(|warning| &source[warning.range()])
        .collect();
    assert_eq!(spans, vec!["&first=later", "&lv_9=1", "(x)"]);

    let reports = collect_reports("maidata.txt", source, &output.warnings);
    assert_eq!(reports.len(), 3);
    emit_maidata_warnings("maidata.txt", source, &output.warnings);
}
