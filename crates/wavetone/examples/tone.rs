//! Renders a reference sine tone to `waveform.wav` and reads it back.
//!
//! The file is written through the streaming writer, so the size fields
//! start as placeholders and are patched in after the last sample.

use std::fs::File;

use wavetone::wav::pcm_hash;
use wavetone::{read_wav, render_to_file, ToneParams};

fn main() {
    let params = ToneParams::new(440.0, 0.5, 2.0);
    let path = "waveform.wav";

    println!(
        "Rendering {} Hz sine tone at amplitude {}...",
        params.frequency, params.amplitude
    );

    if let Err(e) = render_to_file(&params, path) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    println!("Wrote {}", path);

    // Parse the file back to show the container fields on disk.
    let parsed = File::open(path)
        .map_err(wavetone::WavError::from)
        .and_then(|mut file| read_wav(&mut file));
    let (header, payload) = match parsed {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error reading back {}: {}", path, e);
            std::process::exit(1);
        }
    };

    println!("Success!");
    println!("  RIFF chunk size: {}", header.riff_size);
    println!("  Channels: {}", header.channels);
    println!("  Sample rate: {} Hz", header.sample_rate);
    println!("  Byte rate: {}", header.byte_rate);
    println!("  Block align: {}", header.block_align);
    println!("  Bits per sample: {}", header.bits_per_sample);
    println!("  data chunk size: {}", header.data_size);
    println!("  Frames: {}", header.num_frames());
    println!("  Duration: {:.2} seconds", header.duration_seconds());
    println!("  PCM hash: {}", pcm_hash(&payload));
}
