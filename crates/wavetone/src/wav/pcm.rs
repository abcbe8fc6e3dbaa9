//! PCM sample conversion, little-endian packing, and hashing.

use std::io::{self, Write};

use super::format::WavFormat;
use crate::error::WavResult;

/// Writes `value` as a little-endian integer of the given byte width.
///
/// Every multi-byte field and sample in the container goes through this
/// function. The bytes come out least-significant first regardless of the
/// host's native byte order; `to_le_bytes` is defined by value, so this
/// stays correct on big-endian hosts where a raw memory copy would not.
///
/// Signed values must already fit in `width` bytes; the low bytes of the
/// two's complement representation are written as-is.
///
/// # Arguments
/// * `writer` - Output writer
/// * `value` - Integer value (sign-extended to 64 bits if negative)
/// * `width` - Number of bytes to write (2 or 4)
///
/// # Returns
/// Result indicating success or I/O error
pub fn write_le_int<W: Write>(writer: &mut W, value: i64, width: usize) -> io::Result<()> {
    debug_assert!(width == 2 || width == 4, "only 2- and 4-byte fields are defined");
    let bytes = value.to_le_bytes();
    writer.write_all(&bytes[..width])
}

/// Converts one normalized sample to a PCM integer value.
///
/// The sample is clipped to [-1.0, 1.0], scaled by `max_amplitude`, and
/// truncated toward zero. NaN converts to 0. Out-of-range input is clamped
/// rather than wrapped, so an overdriven signal flattens instead of
/// glitching across the integer range.
pub(crate) fn sample_to_pcm(sample: f64, max_amplitude: f64) -> i64 {
    // Clip to [-1, 1]; NaN passes through the clamp and casts to 0.
    let clipped = sample.clamp(-1.0, 1.0);
    (clipped * max_amplitude) as i64
}

/// Converts f64 samples to 16-bit PCM bytes.
///
/// Samples are expected to be in range [-1.0, 1.0]. Values outside this range
/// will be clipped.
///
/// # Arguments
/// * `samples` - Audio samples in f64 format
///
/// # Returns
/// PCM data as little-endian 16-bit samples
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);

    for &sample in samples {
        let value = sample_to_pcm(sample, i16::MAX as f64);
        write_le_int(&mut pcm, value, 2).expect("writing to Vec should not fail");
    }

    pcm
}

/// Converts f64 samples to 32-bit PCM bytes.
///
/// # Arguments
/// * `samples` - Audio samples in f64 format
///
/// # Returns
/// PCM data as little-endian 32-bit samples
pub fn samples_to_pcm32(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 4);

    for &sample in samples {
        let value = sample_to_pcm(sample, i32::MAX as f64);
        write_le_int(&mut pcm, value, 4).expect("writing to Vec should not fail");
    }

    pcm
}

/// Converts f64 samples to PCM bytes at the format's bit depth.
///
/// # Errors
///
/// Returns an error if the format parameters are invalid.
pub fn samples_to_pcm(samples: &[f64], format: &WavFormat) -> WavResult<Vec<u8>> {
    format.validate()?;
    match format.bits_per_sample {
        32 => Ok(samples_to_pcm32(samples)),
        _ => Ok(samples_to_pcm16(samples)),
    }
}

/// Decodes 16-bit PCM bytes to normalized f64 samples.
///
/// Normalization divides by the same maximum used when encoding, so the
/// extreme values map back to exactly 1.0 and -1.0. Intermediate values
/// round to the nearest f64 and are not guaranteed to survive a second
/// encode bit-exactly.
pub fn pcm16_to_samples(pcm: &[u8]) -> Vec<f64> {
    pcm.chunks_exact(2)
        .map(|chunk| i16::from_le_bytes([chunk[0], chunk[1]]) as f64 / i16::MAX as f64)
        .collect()
}

/// Decodes 32-bit PCM bytes to normalized f64 samples.
pub fn pcm32_to_samples(pcm: &[u8]) -> Vec<f64> {
    pcm.chunks_exact(4)
        .map(|chunk| {
            i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]) as f64 / i32::MAX as f64
        })
        .collect()
}

/// Decodes PCM bytes to normalized f64 samples at the format's bit depth.
///
/// # Errors
///
/// Returns an error if the format parameters are invalid.
pub fn pcm_to_samples(pcm: &[u8], format: &WavFormat) -> WavResult<Vec<f64>> {
    format.validate()?;
    match format.bits_per_sample {
        32 => Ok(pcm32_to_samples(pcm)),
        _ => Ok(pcm16_to_samples(pcm)),
    }
}

/// Computes the BLAKE3 hash of raw PCM data.
///
/// Used for comparing renders by their audio content only, independent of
/// container bytes.
///
/// # Arguments
/// * `pcm` - Raw PCM samples as bytes
///
/// # Returns
/// BLAKE3 hash as a hex string
pub fn pcm_hash(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}
