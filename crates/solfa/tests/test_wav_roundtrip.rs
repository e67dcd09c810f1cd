//! Reads generated WAV bytes back and checks the container against what was
//! synthesized.

use std::io::Cursor;

use pretty_assertions::assert_eq;
use solfa::mixer::{amplitude_ceiling, peak};
use solfa::{generate, generate_with_observer, StereoTrack, TrackRecipe};

fn read_stereo_i32(wav_data: &[u8]) -> (hound::WavSpec, Vec<i32>, Vec<i32>) {
    let mut reader = hound::WavReader::new(Cursor::new(wav_data)).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 2);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);

    let samples: Vec<i32> = reader.samples::<i32>().map(|s| s.unwrap()).collect();
    let left: Vec<i32> = samples.iter().step_by(2).copied().collect();
    let right: Vec<i32> = samples.iter().skip(1).step_by(2).copied().collect();
    (spec, left, right)
}

#[test]
fn test_round_trip_16_bit_chord() {
    let recipe = TrackRecipe::simultaneous(["do4", "mi4", "sol4"], 1.0);

    let mut observed: Option<StereoTrack> = None;
    let mut capture = |track: &StereoTrack| observed = Some(track.clone());
    let result = generate_with_observer(&recipe, Some(&mut capture)).unwrap();
    let track = observed.expect("observer not called");

    let (spec, left, right) = read_stereo_i32(&result.wav_data);
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(left.len(), 44100);
    assert_eq!(left, right);

    // The container holds exactly the quantized samples: each synthesized
    // amplitude scaled to the ceiling and truncated toward zero.
    let ceiling = amplitude_ceiling(16);
    let track_peak = peak(&track.left);
    let expected: Vec<i32> = track
        .left
        .iter()
        .map(|s| (s / track_peak * ceiling) as i32)
        .collect();
    assert_eq!(left, expected);
}

#[test]
fn test_normalized_peak_hits_headroom_target() {
    for (bit_depth, note_seconds) in [(16u16, 1.0), (24, 0.5), (32, 0.25)] {
        let mut recipe = TrackRecipe::sequential(["do3", "mi3", "sol3"], note_seconds);
        recipe.bit_depth = bit_depth;
        let result = generate(&recipe).unwrap();

        let (spec, left, _right) = read_stereo_i32(&result.wav_data);
        assert_eq!(spec.bits_per_sample, bit_depth);

        let observed_peak = left.iter().map(|s| s.abs()).max().unwrap();
        let target = amplitude_ceiling(bit_depth) as i32;
        assert!(
            (target - 1..=target).contains(&observed_peak),
            "{bit_depth}-bit peak {observed_peak} missed target {target}"
        );
    }
}

#[test]
fn test_round_trip_preserves_duration() {
    let recipe = TrackRecipe::sequential(["do3", "re3"], 2.0);
    let result = generate(&recipe).unwrap();

    let (spec, left, _right) = read_stereo_i32(&result.wav_data);
    assert_eq!(spec.sample_rate, result.sample_rate);
    assert_eq!(left.len(), 176_400);
    assert_eq!(left.len(), result.num_samples);
}
