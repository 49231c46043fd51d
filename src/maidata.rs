//! The reader of `maidata.txt`, the file holding song metadata and every difficulty's chart.
//!
//! A maidata file is a list of `&key=value` commands. The value of `&inote_N=` goes on over the
//! following lines until the next line beginning with `&`, and that text is parsed by
//! [`crate::simai`]. Other keys are one line long.
//!
//! `&first=` is read before any chart, wherever it is written, so every difficulty starts from
//! the same offset.

use std::ops::Range;

use thiserror::Error;

use crate::simai::{
    SimaiOutput, SimaiWarning,
    config::ParseConfig,
    mixin::{SourceRangeMixin, SourceRangeMixinExt},
    model::{Chart, ChartMetadata, Difficulty},
    number::{NumericSite, read_number},
    parse_simai_with_config,
};

/// A warning about a metadata command.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetadataWarning {
    /// The number in `&lv_N` or `&inote_N` is not 1 to 7, so the command was ignored.
    #[error("`&{0}` names no difficulty, expected 1 to 7")]
    UnknownDifficultyIndex(String),
    /// A difficulty has two charts, so the later one replaced the earlier.
    #[error("{0:?} chart is written again, the earlier one is discarded")]
    DuplicateDifficulty(Difficulty),
    /// `&first=` is not a number, so the charts start at 0 seconds.
    #[error("malformed first beat offset `{0}`, used 0")]
    MalformedFirstBeatOffset(String),
}

/// A metadata warning with position information.
pub type MetadataWarningWithRange = SourceRangeMixin<MetadataWarning>;

/// A warning occurred when reading a maidata file.
///
/// All positions are byte offsets in the whole maidata source, BOM included.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MaidataWarning {
    /// A warning about a metadata command.
    #[error("Warn: metadata: {0}")]
    Metadata(#[from] MetadataWarningWithRange),
    /// A warning from the chart of a difficulty.
    #[error("Warn: {difficulty:?} chart: {warning}")]
    Chart {
        /// The chart the warning came from.
        difficulty: Difficulty,
        /// The warning, positioned in the maidata source.
        warning: SimaiWarning,
    },
}

impl MaidataWarning {
    /// The byte span of the text the warning is about.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        match self {
            Self::Metadata(warning) => warning.range(),
            Self::Chart { warning, .. } => warning.range(),
        }
    }
}

/// Output of reading a maidata file.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct MaidataOutput {
    /// The song and its charts.
    pub chart: Chart,
    /// Warnings that occurred during reading, metadata ones first.
    pub warnings: Vec<MaidataWarning>,
}

/// Read a maidata file.
///
/// # Example
///
/// ```
/// use simai_rs::{
///     maidata::{MaidataOutput, parse_maidata},
///     simai::model::Difficulty,
/// };
///
/// let source = "&title=Song\n&inote_5=(120)\n1,2,\nE\n&first=0.5\n";
/// let MaidataOutput { chart, warnings } = parse_maidata(source);
/// assert!(warnings.is_empty());
/// assert_eq!(chart.metadata.title, "Song");
/// let master = chart.track(Difficulty::Master).unwrap();
/// assert_eq!(master[0].time_secs, 0.5);
/// assert_eq!(master[1].time_secs, 1.0);
/// ```
pub fn parse_maidata(source: &str) -> MaidataOutput {
    parse_maidata_with_config(source, &ParseConfig::default())
}

/// Read a maidata file, parsing every chart with `config`.
///
/// A step of [`parse_maidata`]
pub fn parse_maidata_with_config(source: &str, config: &ParseConfig) -> MaidataOutput {
    let (bom_len, body) = match source.strip_prefix('\u{feff}') {
        Some(body) => (source.len() - body.len(), body),
        None => (0, source),
    };
    let commands = split_commands(body);

    let mut metadata = ChartMetadata::default();
    let mut metadata_warnings = vec![];
    if let Some(first) = commands.iter().rev().find(|command| command.key == "first") {
        let value = first.value(body);
        match read_number(value, NumericSite::FirstBeatOffset) {
            Some(secs) => metadata.first_beat_offset_secs = secs,
            None => metadata_warnings.push(
                MetadataWarning::MalformedFirstBeatOffset(value.to_owned())
                    .into_wrapper_range(first.line_range()),
            ),
        }
    }

    let mut blocks: Vec<Block<'_>> = vec![];
    for command in &commands {
        match command.key {
            "title" => metadata.title = command.value(body).to_owned(),
            "artist" => metadata.artist = command.value(body).to_owned(),
            "des" => metadata.designer = command.value(body).to_owned(),
            "first" => {}
            key => {
                let indexed = key
                    .strip_prefix("lv_")
                    .map(|n| (n, false))
                    .or_else(|| key.strip_prefix("inote_").map(|n| (n, true)));
                let Some((number, is_chart)) = indexed else {
                    metadata
                        .other_commands
                        .push((key.to_owned(), command.value(body).to_owned()));
                    continue;
                };
                let Some(difficulty) = difficulty_of(number) else {
                    metadata_warnings.push(
                        MetadataWarning::UnknownDifficultyIndex(key.to_owned())
                            .into_wrapper_range(command.line_range()),
                    );
                    continue;
                };
                if !is_chart {
                    metadata.levels[difficulty.index()] = command.value(body).to_owned();
                    continue;
                }
                if let Some(at) = blocks.iter().position(|block| block.difficulty == difficulty) {
                    metadata_warnings.push(
                        MetadataWarning::DuplicateDifficulty(difficulty)
                            .into_wrapper_range(command.line_range()),
                    );
                    blocks.remove(at);
                }
                blocks.push(Block {
                    difficulty,
                    offset: command.value_start,
                    text: &body[command.value_start..command.block_end],
                });
            }
        }
    }

    let first_beat_offset_secs = metadata.first_beat_offset_secs;
    let parse_block = |block: &Block<'_>| {
        let output = parse_simai_with_config(block.text, first_beat_offset_secs, config);
        log::debug!(
            "{:?}: {} timing points, {} warnings",
            block.difficulty,
            output.timing_points.len(),
            output.warnings.len()
        );
        (block.difficulty, block.offset, output)
    };
    #[cfg(feature = "rayon")]
    let parsed: Vec<_> = {
        use rayon::prelude::*;
        blocks.par_iter().map(parse_block).collect()
    };
    #[cfg(not(feature = "rayon"))]
    let parsed: Vec<_> = blocks.iter().map(parse_block).collect();

    let mut warnings: Vec<MaidataWarning> = metadata_warnings
        .into_iter()
        .map(|warning| MaidataWarning::Metadata(warning.shifted(bom_len)))
        .collect();
    let mut chart = Chart {
        metadata,
        ..Chart::default()
    };
    for (difficulty, offset, output) in parsed {
        let SimaiOutput {
            timing_points,
            warnings: chart_warnings,
        } = output;
        warnings.extend(
            chart_warnings
                .into_iter()
                .map(|warning| MaidataWarning::Chart {
                    difficulty,
                    warning: warning.shifted(bom_len + offset),
                }),
        );
        chart.difficulties.insert(difficulty, timing_points);
    }
    MaidataOutput { chart, warnings }
}

/// Gets the difficulty of the 1-based number in a key.
fn difficulty_of(number: &str) -> Option<Difficulty> {
    let number: usize = number.parse().ok()?;
    Difficulty::from_index(number.checked_sub(1)?)
}

/// The chart text of a difficulty, sliced out of the source.
#[derive(Debug)]
struct Block<'a> {
    difficulty: Difficulty,
    offset: usize,
    text: &'a str,
}

/// A `&key=value` line.
#[derive(Debug)]
struct Command<'a> {
    key: &'a str,
    line_start: usize,
    value_start: usize,
    line_end: usize,
    /// Start of the next command line, or the end of the source.
    block_end: usize,
}

impl Command<'_> {
    /// The one-line value, surrounding whitespace ignored.
    fn value<'s>(&self, source: &'s str) -> &'s str {
        source[self.value_start..self.line_end].trim()
    }

    fn line_range(&self) -> Range<usize> {
        self.line_start..self.line_end
    }
}

fn split_commands(source: &str) -> Vec<Command<'_>> {
    let mut commands: Vec<Command<'_>> = vec![];
    let mut line_start = 0;
    for line in source.split_inclusive('\n') {
        let start = line_start;
        line_start += line.len();
        let content = line.trim_end_matches(['\n', '\r']);
        let indent = content.len() - content.trim_start().len();
        let Some(command) = content[indent..].strip_prefix('&') else {
            continue;
        };
        if let Some(previous) = commands.last_mut() {
            previous.block_end = start;
        }
        let key_start = start + indent + 1;
        let (key, value_start) = match command.split_once('=') {
            Some((key, _)) => (key.trim(), key_start + key.len() + 1),
            None => (command.trim(), start + content.len()),
        };
        commands.push(Command {
            key,
            line_start: start + indent,
            value_start,
            line_end: start + content.len(),
            block_end: source.len(),
        });
    }
    commands
}
