//! The simai chart notation parser.
//!
//! simai is the text notation of maimai charts, kept in a `maidata.txt` file together with the
//! song metadata. This crate reads such text into timing points of typed notes: taps, holds,
//! slides with their tracks, touches and touch holds, each placed at an absolute time.
//!
//! # Usage
//!
//! - [`maidata::parse_maidata`] reads a whole `maidata.txt` into a [`simai::model::Chart`].
//! - [`simai::parse_simai`] parses the text of one difficulty.
//! - [`simai::parse_difficulty_track`] does the same and only returns the timing points.
//!
//! Parsing never fails. Malformed text is skipped or replaced by a fallback value, and each case
//! is reported as a warning in the output.
//!
//! ```
//! use simai_rs::simai::{SimaiOutput, model::note::NoteKind, parse_simai};
//!
//! let SimaiOutput { timing_points, warnings } =
//!     parse_simai("(120){4}1,2h[4:1],3-7[8:3],Ch,E", 0.0);
//! assert!(warnings.is_empty());
//! let kinds: Vec<_> = timing_points.iter().map(|point| point.notes[0].kind()).collect();
//! assert_eq!(
//!     kinds,
//!     [NoteKind::Tap, NoteKind::Hold, NoteKind::Slide, NoteKind::TouchHold]
//! );
//! ```
//!
//! # Features
//!
//! - `diagnostics` (default): renders warnings with [`ariadne`](https://docs.rs/ariadne).
//! - `serde`: derives `Serialize` and `Deserialize` on the model and warning types.
//! - `rayon`: parses the difficulties of a maidata file in parallel.
//!
//! # Logging
//!
//! Fallbacks and per-difficulty summaries are logged through the [`log`](https://docs.rs/log)
//! facade. Install any logger to see them.

#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "diagnostics")]
pub mod diagnostics;
pub mod maidata;
pub mod simai;
