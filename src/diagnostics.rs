//! Fancy diagnostics support using `ariadne`.
//!
//! This module converts warnings carrying `SourceRangeMixin` (such as `LexWarningWithRange`,
//! `ParseWarningWithRange`, and the aggregated `SimaiWarning` and `MaidataWarning`) to
//! `ariadne::Report` without modifying the warning type definitions.
//!
//! The warnings hold byte spans, and ariadne works out rows and columns from them.
//!
//! # Usage Example
//!
//! ```rust
//! use simai_rs::{diagnostics::emit_simai_warnings, simai::parse_simai};
//!
//! let source = "(120){4}1,(fast)2,9,E";
//! let output = parse_simai(source, 0.0);
//! assert_eq!(output.warnings.len(), 2);
//!
//! emit_simai_warnings("inote_5", source, &output.warnings);
//! ```

use std::ops::Range;

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::{
    maidata::{MaidataWarning, MetadataWarningWithRange},
    simai::{SimaiWarning, lex::LexWarningWithRange, parse::ParseWarningWithRange},
};

/// Simple source container that holds the filename and source text.
///
/// # Usage Example
///
/// ```rust
/// use simai_rs::diagnostics::SimpleSource;
///
/// let source_text = "&title=test\n&inote_1=1,2,\n";
/// let source = SimpleSource::new("maidata.txt", source_text);
///
/// assert_eq!(source.text(), source_text);
/// assert_eq!(source.name(), "maidata.txt");
/// ```
pub struct SimpleSource<'a> {
    /// Name of the source file.
    name: &'a str,
    /// Source text content.
    text: &'a str,
}

impl<'a> SimpleSource<'a> {
    /// Create a new source container instance.
    #[must_use]
    pub const fn new(name: &'a str, text: &'a str) -> Self {
        Self { name, text }
    }

    /// Get source text content.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Get source file name.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }
}

/// Trait for converting positioned warnings to `ariadne::Report`.
pub trait ToAriadne {
    /// Convert the warning to an ariadne Report labelled in `src`.
    fn to_report<'a>(&self, src: &SimpleSource<'a>) -> Report<'a, (String, Range<usize>)>;
}

/// Helper to build a styled ariadne `Report` consistently.
#[must_use]
pub fn build_report<'a>(
    src: &SimpleSource<'a>,
    range: Range<usize>,
    title: &str,
    label_message: impl ToString,
    color: Color,
) -> Report<'a, (String, Range<usize>)> {
    let filename = src.name().to_string();
    Report::build(ReportKind::Warning, (filename.clone(), range.clone()))
        .with_message(title)
        .with_label(
            Label::new((filename, range))
                .with_message(label_message.to_string())
                .with_color(color),
        )
        .finish()
}

impl ToAriadne for LexWarningWithRange {
    fn to_report<'a>(&self, src: &SimpleSource<'a>) -> Report<'a, (String, Range<usize>)> {
        build_report(src, self.range(), "Lex warning", self.content(), Color::Yellow)
    }
}

impl ToAriadne for ParseWarningWithRange {
    fn to_report<'a>(&self, src: &SimpleSource<'a>) -> Report<'a, (String, Range<usize>)> {
        build_report(src, self.range(), "Parse warning", self.content(), Color::Cyan)
    }
}

impl ToAriadne for MetadataWarningWithRange {
    fn to_report<'a>(&self, src: &SimpleSource<'a>) -> Report<'a, (String, Range<usize>)> {
        build_report(
            src,
            self.range(),
            "Metadata warning",
            self.content(),
            Color::Magenta,
        )
    }
}

impl ToAriadne for SimaiWarning {
    fn to_report<'a>(&self, src: &SimpleSource<'a>) -> Report<'a, (String, Range<usize>)> {
        match self {
            Self::LexWarning(warning) => warning.to_report(src),
            Self::ParseWarning(warning) => warning.to_report(src),
        }
    }
}

impl ToAriadne for MaidataWarning {
    fn to_report<'a>(&self, src: &SimpleSource<'a>) -> Report<'a, (String, Range<usize>)> {
        match self {
            Self::Metadata(warning) => warning.to_report(src),
            Self::Chart {
                difficulty,
                warning,
            } => build_report(
                src,
                warning.range(),
                &format!("{difficulty:?} chart warning"),
                warning,
                Color::Cyan,
            ),
        }
    }
}

/// Convenience method: batch render `SimaiWarning` list of a difficulty text.
///
/// # Parameters
/// * `name` - Name of the source, used for display in diagnostic information
/// * `source` - The simai text the warnings were produced from
/// * `warnings` - List of warnings to display
pub fn emit_simai_warnings<'a>(
    name: &'a str,
    source: &'a str,
    warnings: impl IntoIterator<Item = &'a SimaiWarning>,
) {
    emit_reports(name, source, collect_reports(name, source, warnings));
}

/// Convenience method: batch render `MaidataWarning` list of a maidata file.
pub fn emit_maidata_warnings<'a>(
    name: &'a str,
    source: &'a str,
    warnings: impl IntoIterator<Item = &'a MaidataWarning>,
) {
    emit_reports(name, source, collect_reports(name, source, warnings));
}

/// Collect `ariadne::Report` instances for a list of warnings without printing.
///
/// This is useful in tests to verify diagnostics can be generated while keeping test output clean.
#[must_use]
pub fn collect_reports<'a, W: ToAriadne + 'a>(
    name: &'a str,
    source: &'a str,
    warnings: impl IntoIterator<Item = &'a W>,
) -> Vec<Report<'a, (String, Range<usize>)>> {
    let simple = SimpleSource::new(name, source);
    warnings.into_iter().map(|w| w.to_report(&simple)).collect()
}

fn emit_reports<'a>(
    name: &'a str,
    source: &'a str,
    reports: Vec<Report<'a, (String, Range<usize>)>>,
) {
    let ariadne_source = Source::from(source);
    for report in reports {
        if let Err(err) = report.eprint((name.to_string(), ariadne_source.clone())) {
            log::warn!("failed to print a diagnostic: {err}");
        }
    }
}
