//! Canonical PCM WAV container support.
//!
//! This module writes 16- and 32-bit PCM WAV files with a fixed 44-byte
//! header and nothing else: no metadata chunks, no timestamps, no padding.
//! Identical samples always produce identical bytes, so the BLAKE3 hash of
//! the PCM payload can be used to compare renders. The streaming writer
//! defers the two size fields and patches them on finalize; the reader
//! accepts only this canonical shape.

mod format;
mod pcm;
mod reader;
mod writer;


// Re-export public API
pub use format::WavFormat;
pub use pcm::{
    pcm16_to_samples, pcm32_to_samples, pcm_hash, pcm_to_samples, samples_to_pcm,
    samples_to_pcm16, samples_to_pcm32, write_le_int,
};
pub use reader::{read_wav, WavHeader};
pub use writer::{write_wav, write_wav_to_vec, WavWriter, HEADER_LEN};
