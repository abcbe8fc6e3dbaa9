//! Halves the volume of `waveform.wav` and writes `waveform_quiet.wav`.
//!
//! Run the `tone` example first to produce the input file.

use std::fs::File;

use wavetone::wav::write_wav;
use wavetone::read_wav;

fn main() {
    let input = "waveform.wav";
    let output = "waveform_quiet.wav";

    let mut file = match File::open(input) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Error opening {}: {}", input, e);
            eprintln!("Run the tone example first to produce it.");
            std::process::exit(1);
        }
    };

    let (header, payload) = match read_wav(&mut file) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error reading {}: {}", input, e);
            std::process::exit(1);
        }
    };

    println!("Read {}", input);
    println!("  Channels: {}", header.channels);
    println!("  Sample rate: {} Hz", header.sample_rate);
    println!("  Bits per sample: {}", header.bits_per_sample);
    println!("  Frames: {}", header.num_frames());

    if header.bits_per_sample != 16 {
        eprintln!("Error: only 16-bit input is supported");
        std::process::exit(1);
    }

    let quiet: Vec<u8> = payload
        .chunks_exact(2)
        .flat_map(|chunk| {
            let sample = i16::from_le_bytes([chunk[0], chunk[1]]);
            (sample / 2).to_le_bytes()
        })
        .collect();

    let written = File::create(output)
        .map_err(wavetone::WavError::from)
        .and_then(|mut file| write_wav(&mut file, &header.format(), &quiet));
    match written {
        Ok(()) => println!("Wrote {} at half volume", output),
        Err(e) => {
            eprintln!("Error writing {}: {}", output, e);
            std::process::exit(1);
        }
    }
}
