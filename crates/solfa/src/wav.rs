//! Deterministic WAV container writer.
//!
//! Writes RIFF/WAVE files with only the `fmt ` and `data` chunks — no
//! timestamps or variable metadata — so the same samples always produce the
//! same bytes. Supports 8, 16, 24, and 32-bit integer PCM; 8-bit samples are
//! stored unsigned with a 128 offset, as the format requires.

use std::io::{self, Write};

use crate::error::{SynthError, SynthResult};
use crate::mixer::QuantizedTrack;

/// WAV format parameters.
#[derive(Debug, Clone, Copy)]
pub struct WavFormat {
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample: 8, 16, 24, or 32.
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a mono WAV format.
    pub fn mono(sample_rate: u32, bits_per_sample: u16) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample,
        }
    }

    /// Creates a stereo WAV format.
    pub fn stereo(sample_rate: u32, bits_per_sample: u16) -> Self {
        Self {
            channels: 2,
            sample_rate,
            bits_per_sample,
        }
    }

    /// Calculates bytes per sample (per channel).
    fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Calculates block align (bytes per sample frame).
    fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Calculates byte rate (bytes per second).
    fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}

/// Writes a complete WAV file to a writer.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    let file_size = 36 + data_size; // Total file size minus 8 bytes for RIFF header

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(44 + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data).expect("writing to Vec should not fail");
    buffer
}

/// Interleaves a quantized stereo track into little-endian PCM bytes.
///
/// # Errors
/// Returns [`SynthError::InvalidBitDepth`] if the track carries an
/// unsupported width.
pub fn interleave_pcm(track: &QuantizedTrack) -> SynthResult<Vec<u8>> {
    match track.bit_depth {
        8 | 16 | 24 | 32 => {}
        bits => return Err(SynthError::InvalidBitDepth { bits }),
    }

    let bytes_per_sample = track.bit_depth as usize / 8;
    let mut pcm = Vec::with_capacity(track.num_samples() * bytes_per_sample * 2);
    for (&left, &right) in track.left.iter().zip(track.right.iter()) {
        encode_sample(&mut pcm, left, track.bit_depth);
        encode_sample(&mut pcm, right, track.bit_depth);
    }
    Ok(pcm)
}

/// Appends one sample at the given width, little-endian.
fn encode_sample(pcm: &mut Vec<u8>, sample: i32, bits: u16) {
    match bits {
        8 => pcm.push((sample + 128) as u8),
        16 => pcm.extend_from_slice(&(sample as i16).to_le_bytes()),
        24 => pcm.extend_from_slice(&sample.to_le_bytes()[..3]),
        32 => pcm.extend_from_slice(&sample.to_le_bytes()),
        _ => unreachable!("bit depth checked by interleave_pcm"),
    }
}
