//! Solfège note names and the equal-tempered frequency table.
//!
//! The table covers `do1` through `si8` plus three notes below the lowest
//! full octave (`la0`, `la#0`, `si0`). Frequencies follow the equal-tempered
//! 12-tone scale: each semitone is a factor of 2^(1/12) ≈ 1.059463 above the
//! previous one, anchored so that `la4` sits at the 440 Hz standard pitch.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{SynthError, SynthResult};

/// The 12 chromatic solfège names, in semitone order within an octave.
pub const NOTE_NAMES: [&str; 12] = [
    "do", "do#", "re", "re#", "mi", "fa", "fa#", "sol", "sol#", "la", "la#", "si",
];

/// Standard reference pitch in Hz (`la4`).
pub const REFERENCE_PITCH_HZ: f64 = 440.0;

/// Lowest full octave in the table.
pub const OCTAVE_MIN: u8 = 1;

/// Highest octave in the table.
pub const OCTAVE_MAX: u8 = 8;

/// Semitone steps from the `do1` anchor up to the `la4` reference.
const SEMITONES_BELOW_REFERENCE: i32 = 45;

/// The equal-tempered semitone ratio, 2^(1/12).
fn semitone_ratio() -> f64 {
    2.0_f64.powf(1.0 / 12.0)
}

/// Rounding policy applied when deriving the table's anchor frequencies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableRounding {
    /// Floor the `do1` anchor and the three sub-anchor notes to whole Hz.
    ///
    /// This quantization flattens every pitch slightly (the anchor lands on
    /// 32 Hz instead of 32.70 Hz, so `la4` comes out near 430.5 Hz rather
    /// than 440 Hz). It is the documented default behavior, not an accuracy
    /// bug: callers that depend on byte-identical output rely on it.
    #[default]
    Floor,
    /// Keep full floating-point precision everywhere (`la4` = 440 Hz).
    Exact,
}

/// Immutable mapping from solfège note names to frequencies in Hz.
///
/// Entries are stored in ascending pitch order (the three sub-anchor notes
/// first, then octaves 1 through 8), with a hashed index for name lookup.
#[derive(Debug, Clone)]
pub struct NoteTable {
    entries: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl NoteTable {
    /// Builds the table with the default [`TableRounding::Floor`] policy.
    pub fn new() -> Self {
        Self::with_rounding(TableRounding::Floor)
    }

    /// Builds the table with an explicit rounding policy.
    pub fn with_rounding(rounding: TableRounding) -> Self {
        let g = semitone_ratio();
        let round = |freq: f64| match rounding {
            TableRounding::Floor => freq.floor(),
            TableRounding::Exact => freq,
        };
        let anchor = round(REFERENCE_PITCH_HZ / g.powi(SEMITONES_BELOW_REFERENCE));

        let mut entries = Vec::with_capacity(3 + 12 * (OCTAVE_MAX - OCTAVE_MIN + 1) as usize);

        // The three notes below the lowest full octave, counted down in
        // semitones from the anchor.
        for (name, steps) in [("la0", 3), ("la#0", 2), ("si0", 1)] {
            entries.push((name.to_string(), round(anchor / g.powi(steps))));
        }

        // Octaves 1..=8, one semitone per entry. Only the anchor is rounded;
        // the geometric progression above it keeps full precision.
        let mut semitone = 0;
        for octave in OCTAVE_MIN..=OCTAVE_MAX {
            for name in NOTE_NAMES {
                entries.push((format!("{name}{octave}"), anchor * g.powi(semitone)));
                semitone += 1;
            }
        }

        let index = entries
            .iter()
            .enumerate()
            .map(|(i, (name, _))| (name.clone(), i))
            .collect();

        Self { entries, index }
    }

    /// Looks up the frequency for a note name.
    ///
    /// # Errors
    /// Returns [`SynthError::UnknownNote`] for names outside the table
    /// (misspelled name, out-of-range octave). No default frequency is ever
    /// substituted.
    pub fn frequency(&self, name: &str) -> SynthResult<f64> {
        self.index
            .get(name)
            .map(|&i| self.entries[i].1)
            .ok_or_else(|| SynthError::unknown_note(name))
    }

    /// All entries in ascending pitch order.
    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }

    /// Number of notes in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NoteTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_anchor_lands_on_whole_hz() {
        let table = NoteTable::new();
        assert_eq!(table.frequency("do1").unwrap(), 32.0);
    }

    #[test]
    fn test_sub_anchor_notes_are_floored() {
        let table = NoteTable::new();
        assert_eq!(table.frequency("la0").unwrap(), 26.0);
        assert_eq!(table.frequency("la#0").unwrap(), 28.0);
        assert_eq!(table.frequency("si0").unwrap(), 30.0);
    }

    #[test]
    fn test_la4_matches_floored_anchor_progression() {
        let table = NoteTable::new();
        let g = semitone_ratio();
        let la4 = table.frequency("la4").unwrap();
        // 45 semitones above the floored 32 Hz anchor, not the ideal 440 Hz.
        let expected = 32.0 * g.powi(45);
        assert!((la4 - expected).abs() < 1e-9);
        assert!((430.0..431.0).contains(&la4));
    }

    #[test]
    fn test_exact_rounding_restores_reference_pitch() {
        let table = NoteTable::with_rounding(TableRounding::Exact);
        let la4 = table.frequency("la4").unwrap();
        assert!((la4 - REFERENCE_PITCH_HZ).abs() < 1e-9);
    }

    #[test]
    fn test_table_size() {
        let table = NoteTable::new();
        assert_eq!(table.len(), 3 + 12 * 8);
    }

    #[test]
    fn test_adjacent_semitones_keep_equal_tempered_ratio() {
        let table = NoteTable::new();
        let g = semitone_ratio();
        // Skip the three floored sub-anchor notes; the full octaves follow
        // the geometric progression exactly.
        let octaves = &table.entries()[3..];
        for pair in octaves.windows(2) {
            let ratio = pair[1].1 / pair[0].1;
            assert!(
                (ratio / g - 1.0).abs() < 1e-6,
                "{} -> {}: ratio {} is not a semitone",
                pair[0].0,
                pair[1].0,
                ratio
            );
        }
    }

    #[test]
    fn test_octave_doubling() {
        let table = NoteTable::new();
        for octave in OCTAVE_MIN..OCTAVE_MAX {
            for name in NOTE_NAMES {
                let low = table.frequency(&format!("{name}{octave}")).unwrap();
                let high = table.frequency(&format!("{name}{}", octave + 1)).unwrap();
                assert!(
                    (high / low - 2.0).abs() < 1e-9,
                    "{name}{octave} does not double into the next octave"
                );
            }
        }
    }

    #[test]
    fn test_frequencies_strictly_increase() {
        let table = NoteTable::new();
        for pair in table.entries().windows(2) {
            assert!(pair[1].1 > pair[0].1, "{} !> {}", pair[1].0, pair[0].0);
        }
    }

    #[test]
    fn test_unknown_note_is_an_error() {
        let table = NoteTable::new();
        for name in ["ut4", "la9", "DO4", "do", ""] {
            let err = table.frequency(name).unwrap_err();
            assert!(matches!(err, SynthError::UnknownNote { .. }), "{name:?}");
        }
    }
}
