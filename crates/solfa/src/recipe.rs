//! Recipe types describing what to synthesize.
//!
//! A [`TrackRecipe`] is the full input to [`generate`](crate::generate::generate):
//! the notes and how they combine, the timing, and the output sample format.
//! Recipes serialize to and from JSON, so they can be stored alongside the
//! files they produce.

use serde::{Deserialize, Serialize};

use crate::error::{SynthError, SynthResult};
use crate::note::TableRounding;

/// How the notes of a recipe are combined in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Arrangement {
    /// All notes sound at once for the full duration (a chord).
    Simultaneous {
        /// Note names, e.g. `["do4", "mi4", "sol4"]`.
        notes: Vec<String>,
    },
    /// Notes sound one after another, each for the per-note duration.
    Sequential {
        /// Note names in playing order.
        notes: Vec<String>,
    },
    /// A sequential melody over a harmony bed spanning the whole melody.
    Combined {
        /// Melody note names in playing order.
        melody: Vec<String>,
        /// Harmony note names, sounding together underneath the melody.
        harmony: Vec<String>,
    },
}

/// Parameters for one synthesized track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackRecipe {
    /// Notes and how they are combined.
    pub arrangement: Arrangement,
    /// Per-note duration in seconds. For a simultaneous arrangement this is
    /// the total duration of the chord.
    pub duration_seconds: f64,
    /// Sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Output bit depth: 8, 16, 24, or 32.
    #[serde(default = "default_bit_depth")]
    pub bit_depth: u16,
    /// Rounding policy for the note-table anchor.
    #[serde(default)]
    pub rounding: TableRounding,
}

fn default_sample_rate() -> u32 {
    44100
}

fn default_bit_depth() -> u16 {
    16
}

impl TrackRecipe {
    /// Creates a simultaneous (chord) recipe with default output format.
    pub fn simultaneous<I, S>(notes: I, duration_seconds: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_arrangement(
            Arrangement::Simultaneous {
                notes: notes.into_iter().map(Into::into).collect(),
            },
            duration_seconds,
        )
    }

    /// Creates a sequential (melody) recipe with default output format.
    pub fn sequential<I, S>(notes: I, note_seconds: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_arrangement(
            Arrangement::Sequential {
                notes: notes.into_iter().map(Into::into).collect(),
            },
            note_seconds,
        )
    }

    /// Creates a combined (song) recipe with default output format.
    pub fn combined<I, J, S, T>(melody: I, harmony: J, note_seconds: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self::with_arrangement(
            Arrangement::Combined {
                melody: melody.into_iter().map(Into::into).collect(),
                harmony: harmony.into_iter().map(Into::into).collect(),
            },
            note_seconds,
        )
    }

    fn with_arrangement(arrangement: Arrangement, duration_seconds: f64) -> Self {
        Self {
            arrangement,
            duration_seconds,
            sample_rate: default_sample_rate(),
            bit_depth: default_bit_depth(),
            rounding: TableRounding::default(),
        }
    }

    /// Checks parameter ranges.
    ///
    /// An empty note list is accepted here: it produces a silent track and
    /// surfaces as [`SynthError::SilentTrack`] during normalization instead.
    pub fn validate(&self) -> SynthResult<()> {
        if !self.duration_seconds.is_finite() || self.duration_seconds <= 0.0 {
            return Err(SynthError::InvalidDuration {
                duration: self.duration_seconds,
            });
        }
        if self.sample_rate == 0 {
            return Err(SynthError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        match self.bit_depth {
            8 | 16 | 24 | 32 => {}
            bits => return Err(SynthError::InvalidBitDepth { bits }),
        }
        Ok(())
    }
}
