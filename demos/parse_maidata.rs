//! Reads a `maidata.txt`, prints a summary of every chart and renders the warnings.

use std::path::{Path, PathBuf};

use clap::Parser;
use simai_rs::{
    diagnostics::emit_maidata_warnings,
    maidata::{MaidataOutput, parse_maidata_with_config},
    simai::prelude::*,
};

#[derive(Parser, Debug)]
#[command(name = "parse_maidata")]
#[command(about = "Parses a maidata.txt and summarizes its charts", long_about = None)]
struct Config {
    /// Chart file path
    #[arg(value_name = "FILE")]
    chart_path: PathBuf,

    /// Length of holds written without timing bracket, as in `[N:1]`
    #[arg(long, default_value_t = DEFAULT_PSEUDO_HOLD_DIVISOR, value_name = "N")]
    pseudo_hold_divisor: u32,

    /// Print every timing point of the charts
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), String> {
    let config = Config::parse();
    let source = load_text(&config.chart_path)?;
    let parse_config = ParseConfig::default().with_pseudo_hold_divisor(config.pseudo_hold_divisor);

    let MaidataOutput { chart, warnings } = parse_maidata_with_config(&source, &parse_config);
    let metadata = &chart.metadata;
    println!("{} / {} (chart by {})", metadata.title, metadata.artist, metadata.designer);
    println!("first beat at {:.3}s", metadata.first_beat_offset_secs);

    for (difficulty, track) in &chart.difficulties {
        let notes = track.iter().map(|point| point.notes.len()).sum::<usize>();
        let last = track.last().map_or(0.0, |point| point.time_secs);
        println!(
            "{difficulty:?} [lv {}]: {notes} notes in {} timing points, last at {last:.3}s",
            metadata.level(*difficulty).unwrap_or("-"),
            track.len(),
        );
        if config.verbose {
            for point in track {
                println!("  {:>9.3}s ({:>6.2} bpm) {}", point.time_secs, point.bpm, point.each_text());
            }
        }
    }

    if !warnings.is_empty() {
        println!("\n{} warnings", warnings.len());
        let name = config.chart_path.to_string_lossy();
        emit_maidata_warnings(&name, &source, &warnings);
    }
    Ok(())
}

/// Reads the file as UTF-8, falling back to Shift_JIS which older charts are saved in.
fn load_text(path: &Path) -> Result<String, String> {
    let bytes = std::fs::read(path).map_err(|e| format!("Failed to read file: {e}"))?;
    let (text, had_errors) = encoding_rs::UTF_8.decode_without_bom_handling(&bytes);
    if !had_errors {
        return Ok(text.into_owned());
    }
    Ok(encoding_rs::SHIFT_JIS.decode(&bytes).0.into_owned())
}
