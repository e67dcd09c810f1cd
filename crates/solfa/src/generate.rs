//! Main entry point for track generation.
//!
//! Ties the pipeline together: validate the recipe, build the note table,
//! synthesize the arrangement, normalize and quantize, encode the WAV
//! container. One pass, no retries — every step is deterministic, so a
//! failure is either a bad recipe or an I/O problem, and both are reported
//! as-is.

use std::fs;
use std::path::Path;

use crate::error::SynthResult;
use crate::mixer::{normalize_and_quantize, StereoTrack};
use crate::note::NoteTable;
use crate::recipe::TrackRecipe;
use crate::synthesis::compose;
use crate::wav::{interleave_pcm, write_wav_to_vec, WavFormat};

/// Result of generating one track.
#[derive(Debug)]
pub struct GenerateResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM payload (container header excluded).
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Output bit depth.
    pub bit_depth: u16,
    /// Number of samples per channel.
    pub num_samples: usize,
}

impl GenerateResult {
    /// Duration of the generated audio in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}

/// Synthesizes a recipe into a stereo WAV file.
pub fn generate(recipe: &TrackRecipe) -> SynthResult<GenerateResult> {
    generate_with_observer(recipe, None)
}

/// Like [`generate`], but invokes `observer` with the synthesized track
/// before normalization.
///
/// The observer sees raw accumulated amplitudes (roughly `[-n, n]` for `n`
/// summed components), which is the useful view for plotting or inspecting a
/// mix. It has no effect on the generated output.
pub fn generate_with_observer(
    recipe: &TrackRecipe,
    observer: Option<&mut dyn FnMut(&StereoTrack)>,
) -> SynthResult<GenerateResult> {
    recipe.validate()?;

    let table = NoteTable::with_rounding(recipe.rounding);
    let track = compose(&table, recipe)?;
    if let Some(observer) = observer {
        observer(&track);
    }

    let quantized = normalize_and_quantize(&track, recipe.bit_depth)?;
    let pcm = interleave_pcm(&quantized)?;
    let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
    let format = WavFormat::stereo(recipe.sample_rate, recipe.bit_depth);
    let wav_data = write_wav_to_vec(&format, &pcm);

    Ok(GenerateResult {
        wav_data,
        pcm_hash,
        sample_rate: recipe.sample_rate,
        bit_depth: recipe.bit_depth,
        num_samples: quantized.num_samples(),
    })
}

/// Generates a recipe and writes the WAV file to `path`.
pub fn generate_to_file(recipe: &TrackRecipe, path: impl AsRef<Path>) -> SynthResult<GenerateResult> {
    let result = generate(recipe)?;
    fs::write(path, &result.wav_data)?;
    Ok(result)
}
