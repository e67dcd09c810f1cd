//! Sine-wave synthesis and track composition.
//!
//! All composition is monophonic at its core: a chord sums sine components
//! into one accumulator, a melody concatenates per-note spans, and a song
//! lays a chord bed under a melody. The mono buffer is duplicated into a
//! [`StereoTrack`] at the boundary, so both output channels always carry
//! identical content.

use std::f64::consts::TAU;

use crate::error::SynthResult;
use crate::mixer::StereoTrack;
use crate::note::NoteTable;
use crate::recipe::{Arrangement, TrackRecipe};

/// Number of whole samples in a span of `duration_seconds` at `sample_rate`.
pub fn num_samples(duration_seconds: f64, sample_rate: u32) -> usize {
    (duration_seconds * sample_rate as f64) as usize
}

/// Adds one sine component into an accumulator buffer.
///
/// The time axis is half-open: sample `k` sits at `k * duration / n`, so the
/// span's endpoint is excluded and `n` samples cover exactly `duration`
/// seconds.
fn sine_into(accumulator: &mut [f64], frequency: f64, duration_seconds: f64) {
    let n = accumulator.len();
    if n == 0 {
        return;
    }
    let step = duration_seconds / n as f64;
    for (k, sample) in accumulator.iter_mut().enumerate() {
        *sample += (TAU * frequency * k as f64 * step).sin();
    }
}

/// Sums sines for all notes over one shared span (a chord).
pub fn simultaneous(
    table: &NoteTable,
    notes: &[String],
    duration_seconds: f64,
    sample_rate: u32,
) -> SynthResult<Vec<f64>> {
    let mut track = vec![0.0; num_samples(duration_seconds, sample_rate)];
    for note in notes {
        let frequency = table.frequency(note)?;
        sine_into(&mut track, frequency, duration_seconds);
    }
    Ok(track)
}

/// Concatenates one sine span per note, in order (a melody).
///
/// Every note restarts at phase zero; the output length is exactly
/// `notes.len() * num_samples(note_seconds, sample_rate)`.
pub fn sequential(
    table: &NoteTable,
    notes: &[String],
    note_seconds: f64,
    sample_rate: u32,
) -> SynthResult<Vec<f64>> {
    let span = num_samples(note_seconds, sample_rate);
    let mut track = Vec::with_capacity(span * notes.len());
    for note in notes {
        let frequency = table.frequency(note)?;
        let mut tone = vec![0.0; span];
        sine_into(&mut tone, frequency, note_seconds);
        track.extend_from_slice(&tone);
    }
    Ok(track)
}

/// Lays a harmony bed under a sequential melody (a song).
///
/// The bed's time axis covers the number of *whole* seconds in the melody,
/// stretched across exactly the melody's sample count; every harmony note is
/// summed over that axis straight into the melody buffer. A melody shorter
/// than one second therefore gets a zero-frequency (silent) bed.
pub fn combined(
    table: &NoteTable,
    melody: &[String],
    harmony: &[String],
    note_seconds: f64,
    sample_rate: u32,
) -> SynthResult<Vec<f64>> {
    let mut track = sequential(table, melody, note_seconds, sample_rate)?;
    let whole_seconds = (track.len() as u64 / sample_rate as u64) as f64;
    for note in harmony {
        let frequency = table.frequency(note)?;
        sine_into(&mut track, frequency, whole_seconds);
    }
    Ok(track)
}

/// Synthesizes a recipe's arrangement into a stereo track.
///
/// The recipe is assumed validated; note lookups can still fail with
/// [`SynthError::UnknownNote`](crate::error::SynthError::UnknownNote).
pub fn compose(table: &NoteTable, recipe: &TrackRecipe) -> SynthResult<StereoTrack> {
    let mono = match &recipe.arrangement {
        Arrangement::Simultaneous { notes } => simultaneous(
            table,
            notes,
            recipe.duration_seconds,
            recipe.sample_rate,
        )?,
        Arrangement::Sequential { notes } => {
            sequential(table, notes, recipe.duration_seconds, recipe.sample_rate)?
        }
        Arrangement::Combined { melody, harmony } => combined(
            table,
            melody,
            harmony,
            recipe.duration_seconds,
            recipe.sample_rate,
        )?,
    };
    Ok(StereoTrack::from_mono(mono))
}
