//! Wavetone
//!
//! This crate synthesizes sine tones and writes them as canonical PCM WAV
//! files, laying out the RIFF container by hand: the "RIFF" header, the
//! 16-byte PCM fmt chunk, and the data chunk, with every multi-byte field
//! packed little-endian regardless of host byte order.
//!
//! # Overview
//!
//! Two pieces compose linearly. A [`SineOscillator`] produces successive
//! amplitude samples, advancing its phase on every call. The WAV layer
//! consumes those samples and produces a byte-exact file, either in one
//! shot when the payload length is known ([`render`]) or by streaming into
//! a seekable sink and patching the two deferred size fields afterwards
//! ([`render_to`]).
//!
//! # Determinism
//!
//! Rendering is fully deterministic: the same parameters always produce
//! byte-identical output. The BLAKE3 hash of the PCM payload is returned
//! alongside the file bytes so renders can be compared by audio content
//! alone.
//!
//! # Example
//!
//! ```
//! # fn main() -> wavetone::WavResult<()> {
//! use wavetone::{render, ToneParams};
//!
//! let params = ToneParams::new(440.0, 0.5, 2.0);
//! let result = render(&params)?;
//!
//! // 44-byte header plus 2 seconds of mono 16-bit samples at 44100 Hz
//! assert_eq!(result.wav_data.len(), 176444);
//! println!("PCM hash: {}", result.pcm_hash);
//! # Ok(())
//! # }
//! ```
//!
//! # Crate Structure
//!
//! - [`tone`] - Main entry points for tone rendering
//! - [`oscillator`] - Sine oscillator
//! - [`wav`] - Canonical WAV container writer and reader
//! - [`error`] - Error types

pub mod error;
pub mod oscillator;
pub mod tone;
pub mod wav;

// Re-export main types at crate root
pub use error::{WavError, WavResult};
pub use oscillator::SineOscillator;
pub use tone::{render, render_to, render_to_file, ToneParams, ToneRender};
pub use wav::{read_wav, WavFormat, WavHeader, WavWriter};
