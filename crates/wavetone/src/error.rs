//! Error types for WAV encoding and tone rendering.

use thiserror::Error;

/// Result type for WAV operations.
pub type WavResult<T> = Result<T, WavError>;

/// Errors that can occur during tone rendering and WAV container I/O.
#[derive(Debug, Error)]
pub enum WavError {
    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Unsupported bit depth.
    #[error("unsupported bit depth: {bits} bits per sample (expected 16 or 32)")]
    InvalidBitDepth {
        /// The unsupported bit depth.
        bits: u16,
    },

    /// Invalid channel count.
    #[error("invalid channel count: {channels}")]
    InvalidChannelCount {
        /// The invalid channel count.
        channels: u16,
    },

    /// Invalid frequency.
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
    },

    /// Invalid amplitude.
    #[error("invalid amplitude: {amplitude} (expected a finite value in [-1, 1])")]
    InvalidAmplitude {
        /// The invalid amplitude.
        amplitude: f64,
    },

    /// Invalid duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Audio payload too large for a RIFF size field.
    #[error("audio data too large for WAV: {bytes} bytes exceeds the 32-bit chunk size limit")]
    DataTooLarge {
        /// Payload size in bytes.
        bytes: u64,
    },

    /// A four-byte tag in the container did not match the canonical layout.
    #[error("unexpected tag: expected \"{expected}\", found \"{found}\"")]
    UnexpectedTag {
        /// The tag required at this position.
        expected: String,
        /// The tag actually read.
        found: String,
    },

    /// Compression code other than uncompressed PCM.
    #[error("unsupported compression code: {code} (only PCM (1) is supported)")]
    UnsupportedCompression {
        /// The format code from the fmt chunk.
        code: u16,
    },

    /// fmt chunk length other than the 16 bytes of the canonical PCM layout.
    #[error("unsupported fmt chunk size: {size} (expected 16)")]
    UnsupportedFmtChunkSize {
        /// The declared fmt chunk size.
        size: u32,
    },

    /// A derived header field disagrees with the fields it is computed from.
    #[error("inconsistent header: {field} is {found}, expected {expected}")]
    InconsistentHeader {
        /// Name of the offending field.
        field: &'static str,
        /// Value implied by the other header fields.
        expected: u32,
        /// Value actually read.
        found: u32,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WavError {
    /// Creates an unexpected-tag error from raw tag bytes.
    pub fn unexpected_tag(expected: &[u8; 4], found: &[u8; 4]) -> Self {
        Self::UnexpectedTag {
            expected: expected.escape_ascii().to_string(),
            found: found.escape_ascii().to_string(),
        }
    }

    /// Creates an inconsistent-header error.
    pub fn inconsistent_header(field: &'static str, expected: u32, found: u32) -> Self {
        Self::InconsistentHeader {
            field,
            expected,
            found,
        }
    }
}
