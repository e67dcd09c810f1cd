//! Writes an ascending do-major scale to `melody.wav`, two seconds per note.

use solfa::{generate_to_file, TrackRecipe};

fn main() {
    let scale = ["do3", "re3", "mi3", "fa3", "sol3", "la3", "si3", "do4"];
    let recipe = TrackRecipe::sequential(scale, 2.0);

    match generate_to_file(&recipe, "melody.wav") {
        Ok(result) => {
            println!("melody.wav written");
            println!("  Duration: {} s", result.duration_seconds());
            println!("  PCM hash: {}", result.pcm_hash);
        }
        Err(err) => {
            eprintln!("Generation failed: {err}");
            std::process::exit(1);
        }
    }
}
