//! WAV file format parameters.

use crate::error::{WavError, WavResult};

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (16 or 32).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a mono 16-bit WAV format.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// Creates a stereo 16-bit WAV format.
    pub fn stereo(sample_rate: u32) -> Self {
        Self {
            channels: 2,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// Checks that the parameters describe a writable PCM format.
    ///
    /// # Errors
    ///
    /// Returns an error if the sample rate or channel count is zero, or if
    /// the bit depth is anything other than 16 or 32.
    pub fn validate(&self) -> WavResult<()> {
        if self.sample_rate == 0 {
            return Err(WavError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        if self.channels == 0 {
            return Err(WavError::InvalidChannelCount {
                channels: self.channels,
            });
        }
        if self.bits_per_sample != 16 && self.bits_per_sample != 32 {
            return Err(WavError::InvalidBitDepth {
                bits: self.bits_per_sample,
            });
        }
        Ok(())
    }

    /// Calculates bytes per sample (per channel).
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Calculates block align (bytes per sample frame).
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Calculates byte rate (bytes per second).
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }

    /// Largest positive PCM value at this bit depth, as a float.
    ///
    /// Conversion scales by the positive maximum for both polarities, so
    /// -1.0 maps to the negative of this value rather than the slightly
    /// larger two's complement minimum.
    pub(crate) fn max_amplitude(&self) -> f64 {
        match self.bits_per_sample {
            16 => i16::MAX as f64,
            _ => i32::MAX as f64,
        }
    }
}

impl Default for WavFormat {
    /// Mono 16-bit at 44100 Hz, the format of the reference tone.
    fn default() -> Self {
        Self::mono(44100)
    }
}
