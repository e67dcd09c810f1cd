//! solfa — deterministic solfège note synthesis.
//!
//! This crate turns short note sequences into stereo PCM WAV files. It
//! supports three arrangements:
//!
//! - **Simultaneous** — all notes sound together for the full duration (a chord)
//! - **Sequential** — notes play one after another (a melody)
//! - **Combined** — a melody over a harmony bed spanning its whole length (a song)
//!
//! # Pitch model
//!
//! Note names use solfège (`do`, `do#`, ..., `si`) followed by an octave
//! number, e.g. `"la4"`. Frequencies come from the equal-tempered 12-tone
//! scale; the table anchor is floored to whole Hz by default (see
//! [`TableRounding`]), which flattens every pitch slightly and is part of the
//! crate's byte-stable output contract.
//!
//! # Determinism
//!
//! Generation is a single deterministic pass: the same recipe always yields
//! byte-identical WAV output. [`GenerateResult::pcm_hash`] carries a BLAKE3
//! hash of the PCM payload for cheap equality checks.
//!
//! # Example
//!
//! ```
//! use solfa::{generate, TrackRecipe};
//!
//! let recipe = TrackRecipe::simultaneous(["do4", "mi4", "sol4"], 1.0);
//! let result = generate(&recipe).unwrap();
//!
//! assert_eq!(result.num_samples, 44100);
//! // std::fs::write("chord.wav", &result.wav_data)?;
//! ```
//!
//! # Crate structure
//!
//! - [`generate()`] - main entry point (recipe in, WAV bytes out)
//! - [`note`] - solfège note table builder
//! - [`recipe`] - serde-backed recipe types
//! - [`synthesis`] - sine generation and track composition
//! - [`mixer`] - peak normalization and integer quantization
//! - [`wav`] - deterministic WAV container writer

pub mod error;
pub mod generate;
pub mod mixer;
pub mod note;
pub mod recipe;
pub mod synthesis;
pub mod wav;

// Re-export main types at crate root
pub use error::{SynthError, SynthResult};
pub use generate::{generate, generate_to_file, generate_with_observer, GenerateResult};
pub use mixer::StereoTrack;
pub use note::{NoteTable, TableRounding};
pub use recipe::{Arrangement, TrackRecipe};
