//! Driver — renders every effect in the library and writes the WAV
//! files under `assets/sounds`.

use std::fs;
use std::path::Path;
use std::process;

use sfxgen::dsp::renderer;
use sfxgen::effects;
use sfxgen::error::SfxError;

/// Output directory for generated sounds, relative to the working dir.
const OUTPUT_DIR: &str = "assets/sounds";

fn main() {
    if let Err(err) = run() {
        eprintln!("sfxgen: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), SfxError> {
    let out_dir = Path::new(OUTPUT_DIR);
    fs::create_dir_all(out_dir).map_err(|source| SfxError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut rng = rand::rng();
    for spec in effects::library() {
        let samples = effects::build(&spec, &mut rng);
        let path = out_dir.join(&spec.file_name);
        renderer::write_wav(&samples, &path)?;
        println!("Generated {}", path.display());
    }

    println!("All sounds generated in {OUTPUT_DIR}/");
    Ok(())
}
