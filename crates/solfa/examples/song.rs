//! Writes a short song to `song.wav`: a fifteen-note melody over a do-sol
//! harmony bed, one second per melody note.

use solfa::{generate_to_file, TrackRecipe};

fn main() {
    let melody = [
        "do4", "do4", "do4", "do5", "fa4", "fa4", "fa4", "fa3", "do4", "do4", "do4", "sol4",
        "do5", "do5", "do5",
    ];
    let harmony = ["do4", "sol4"];
    let recipe = TrackRecipe::combined(melody, harmony, 1.0);

    match generate_to_file(&recipe, "song.wav") {
        Ok(result) => {
            println!("song.wav written");
            println!("  Duration: {} s", result.duration_seconds());
            println!("  Samples per channel: {}", result.num_samples);
            println!("  PCM hash: {}", result.pcm_hash);
        }
        Err(err) => {
            eprintln!("Generation failed: {err}");
            std::process::exit(1);
        }
    }
}
