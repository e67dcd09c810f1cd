//! Writes a 12-second do-major chord to `harmony.wav`.

use solfa::{generate_to_file, TrackRecipe};

fn main() {
    let recipe = TrackRecipe::simultaneous(["do4", "mi4", "sol4"], 12.0);

    match generate_to_file(&recipe, "harmony.wav") {
        Ok(result) => {
            println!("harmony.wav written");
            println!("  Sample rate: {} Hz", result.sample_rate);
            println!("  Samples per channel: {}", result.num_samples);
            println!("  PCM hash: {}", result.pcm_hash);
        }
        Err(err) => {
            eprintln!("Generation failed: {err}");
            std::process::exit(1);
        }
    }
}
