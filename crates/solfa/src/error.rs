//! Error types for table building, synthesis, and output.

use thiserror::Error;

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur while building the note table, synthesizing a track,
/// or writing the output file.
#[derive(Debug, Error)]
pub enum SynthError {
    /// Note name not present in the frequency table.
    #[error("unknown note: {name}")]
    UnknownNote {
        /// The name that failed to resolve.
        name: String,
    },

    /// Track peak amplitude is zero, so peak normalization is undefined.
    #[error("track is empty or silent; nothing to normalize")]
    SilentTrack,

    /// Invalid sample rate.
    #[error("invalid sample rate: {rate} Hz")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Invalid duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Unsupported output bit depth.
    #[error("invalid bit depth: {bits} (supported: 8, 16, 24, 32)")]
    InvalidBitDepth {
        /// The invalid bit depth.
        bits: u16,
    },

    /// I/O error while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SynthError {
    /// Creates an unknown-note error.
    pub fn unknown_note(name: impl Into<String>) -> Self {
        Self::UnknownNote { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_note_helper() {
        let err = SynthError::unknown_note("ut4");
        assert!(err.to_string().contains("ut4"));
    }

    #[test]
    fn test_bit_depth_message_lists_supported_widths() {
        let err = SynthError::InvalidBitDepth { bits: 12 };
        assert!(err.to_string().contains("12"));
        assert!(err.to_string().contains("8, 16, 24, 32"));
    }
}
