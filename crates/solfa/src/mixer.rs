//! Stereo track buffers, peak normalization, and integer quantization.

use crate::error::{SynthError, SynthResult};

/// A pair of equal-length floating-point sample buffers, one per channel.
#[derive(Debug, Clone, PartialEq)]
pub struct StereoTrack {
    /// Left channel samples.
    pub left: Vec<f64>,
    /// Right channel samples.
    pub right: Vec<f64>,
}

impl StereoTrack {
    /// Creates a silent track of `num_samples` per channel.
    pub fn silent(num_samples: usize) -> Self {
        Self {
            left: vec![0.0; num_samples],
            right: vec![0.0; num_samples],
        }
    }

    /// Duplicates one mono buffer into both channels.
    pub fn from_mono(samples: Vec<f64>) -> Self {
        Self {
            left: samples.clone(),
            right: samples,
        }
    }

    /// Number of samples per channel.
    pub fn num_samples(&self) -> usize {
        self.left.len()
    }

    /// Returns true if the track holds no samples.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }
}

/// A stereo track quantized to signed integer samples.
///
/// Samples are held as `i32` regardless of bit depth; narrower depths only
/// use the low bits (their range is bounded by [`amplitude_ceiling`]).
#[derive(Debug, Clone, PartialEq)]
pub struct QuantizedTrack {
    /// Left channel samples.
    pub left: Vec<i32>,
    /// Right channel samples.
    pub right: Vec<i32>,
    /// Bit depth the samples were quantized for.
    pub bit_depth: u16,
}

impl QuantizedTrack {
    /// Number of samples per channel.
    pub fn num_samples(&self) -> usize {
        self.left.len()
    }
}

/// Normalization target for a signed sample width: `2^(bits-1) - 10`.
///
/// The 10-step headroom below the signed maximum keeps the peak clear of
/// clipping after truncation.
pub fn amplitude_ceiling(bit_depth: u16) -> f64 {
    (1i64 << (bit_depth - 1)) as f64 - 10.0
}

/// Largest absolute sample value in a buffer (0.0 for an empty buffer).
pub fn peak(samples: &[f64]) -> f64 {
    samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f64, |a, b| a.max(b))
}

/// Scales each channel so its own peak hits the amplitude ceiling, then
/// truncates every sample toward zero into a signed integer.
///
/// # Errors
/// Returns [`SynthError::SilentTrack`] if a channel's peak is zero (empty
/// note list, or components cancelling to silence), since the scaling step
/// would otherwise divide by zero.
pub fn normalize_and_quantize(track: &StereoTrack, bit_depth: u16) -> SynthResult<QuantizedTrack> {
    let ceiling = amplitude_ceiling(bit_depth);
    Ok(QuantizedTrack {
        left: quantize_channel(&track.left, ceiling)?,
        right: quantize_channel(&track.right, ceiling)?,
        bit_depth,
    })
}

fn quantize_channel(samples: &[f64], ceiling: f64) -> SynthResult<Vec<i32>> {
    let peak = peak(samples);
    if peak == 0.0 {
        return Err(SynthError::SilentTrack);
    }
    // Divide-then-multiply keeps the peak sample exact: peak / peak is
    // exactly 1.0, so the loudest sample truncates to the ceiling itself.
    Ok(samples.iter().map(|s| (s / peak * ceiling) as i32).collect())
}
