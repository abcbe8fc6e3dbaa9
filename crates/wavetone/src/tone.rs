//! Main entry point for tone rendering.
//!
//! This module takes tone parameters and produces a WAV file
//! deterministically, either in memory or streamed to a seekable sink.

use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use crate::error::{WavError, WavResult};
use crate::oscillator::SineOscillator;
use crate::wav::{pcm_hash, samples_to_pcm, write_wav_to_vec, WavFormat, WavWriter, HEADER_LEN};

/// Parameters for rendering a sine tone.
#[derive(Debug, Clone, Copy)]
pub struct ToneParams {
    /// Tone frequency in Hz.
    pub frequency: f64,
    /// Peak amplitude in [-1.0, 1.0].
    pub amplitude: f64,
    /// Tone length in seconds.
    pub duration_seconds: f64,
    /// Output format parameters.
    pub format: WavFormat,
}

impl ToneParams {
    /// Creates tone parameters with the default mono 16-bit 44100 Hz format.
    pub fn new(frequency: f64, amplitude: f64, duration_seconds: f64) -> Self {
        Self {
            frequency,
            amplitude,
            duration_seconds,
            format: WavFormat::default(),
        }
    }

    /// Creates tone parameters with an explicit output format.
    pub fn with_format(
        frequency: f64,
        amplitude: f64,
        duration_seconds: f64,
        format: WavFormat,
    ) -> Self {
        Self {
            frequency,
            amplitude,
            duration_seconds,
            format,
        }
    }

    /// Number of sample frames the render will produce.
    pub fn num_frames(&self) -> u64 {
        (self.format.sample_rate as f64 * self.duration_seconds).round() as u64
    }

    /// Checks that the parameters describe a renderable tone.
    ///
    /// A duration of exactly zero is valid and renders a 44-byte file with
    /// an empty data chunk.
    ///
    /// # Errors
    ///
    /// Returns an error if the format is invalid, the frequency is not a
    /// finite positive number, the amplitude is not finite or lies outside
    /// [-1, 1], the duration is not finite or is negative, or the payload
    /// would overflow a 32-bit RIFF size field.
    pub fn validate(&self) -> WavResult<()> {
        self.format.validate()?;
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(WavError::InvalidFrequency {
                freq: self.frequency,
            });
        }
        if !self.amplitude.is_finite() || self.amplitude.abs() > 1.0 {
            return Err(WavError::InvalidAmplitude {
                amplitude: self.amplitude,
            });
        }
        if !self.duration_seconds.is_finite() || self.duration_seconds < 0.0 {
            return Err(WavError::InvalidDuration {
                duration: self.duration_seconds,
            });
        }

        let payload_bytes = self
            .num_frames()
            .checked_mul(self.format.block_align() as u64);
        match payload_bytes {
            Some(bytes) if bytes.saturating_add(HEADER_LEN - 8) <= u32::MAX as u64 => Ok(()),
            Some(bytes) => Err(WavError::DataTooLarge { bytes }),
            None => Err(WavError::DataTooLarge { bytes: u64::MAX }),
        }
    }
}

/// Result of tone rendering.
#[derive(Debug)]
pub struct ToneRender {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of PCM data only.
    pub pcm_hash: String,
    /// Output format parameters.
    pub format: WavFormat,
    /// Number of sample frames rendered.
    pub num_frames: u64,
}

impl ToneRender {
    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_frames as f64 / self.format.sample_rate as f64
    }
}

/// Renders a sine tone to an in-memory WAV file.
///
/// The payload length is known up front, so both header size fields are
/// computed before any bytes are laid down.
///
/// # Arguments
/// * `params` - Tone parameters
///
/// # Returns
/// Complete WAV file bytes plus the PCM hash and frame count
pub fn render(params: &ToneParams) -> WavResult<ToneRender> {
    params.validate()?;

    let num_frames = params.num_frames();
    let channels = params.format.channels as usize;
    let mut oscillator =
        SineOscillator::new(params.frequency, params.amplitude, params.format.sample_rate);

    // A mono oscillator feeds every channel of a frame the same value.
    let mut samples = Vec::with_capacity(num_frames as usize * channels);
    for _ in 0..num_frames {
        let sample = oscillator.next_sample();
        for _ in 0..channels {
            samples.push(sample);
        }
    }

    let pcm = samples_to_pcm(&samples, &params.format)?;
    let pcm_hash = pcm_hash(&pcm);
    let wav_data = write_wav_to_vec(&params.format, &pcm)?;

    Ok(ToneRender {
        wav_data,
        pcm_hash,
        format: params.format,
        num_frames,
    })
}

/// Renders a sine tone by streaming samples into a seekable sink.
///
/// The header goes out with placeholder size fields that are patched once
/// the last sample is written. Produces byte-identical output to
/// [`render`].
///
/// # Arguments
/// * `params` - Tone parameters
/// * `writer` - Seekable output sink, positioned at the file start
///
/// # Returns
/// The sink, positioned at the end of the finished file
pub fn render_to<W: Write + Seek>(params: &ToneParams, writer: W) -> WavResult<W> {
    params.validate()?;

    let mut oscillator =
        SineOscillator::new(params.frequency, params.amplitude, params.format.sample_rate);
    let mut wav_writer = WavWriter::new(writer, params.format)?;

    for _ in 0..params.num_frames() {
        let sample = oscillator.next_sample();
        for _ in 0..params.format.channels {
            wav_writer.write_sample(sample)?;
        }
    }

    wav_writer.finalize()
}

/// Renders a sine tone to a file, creating or overwriting it.
///
/// A failure partway through leaves a truncated file behind; the caller is
/// responsible for discarding it.
///
/// # Arguments
/// * `params` - Tone parameters
/// * `path` - Output file path
pub fn render_to_file<P: AsRef<Path>>(params: &ToneParams, path: P) -> WavResult<()> {
    let file = File::create(path)?;
    render_to(params, file)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::oscillator::SineOscillator;
    use crate::wav::samples_to_pcm16;

    #[test]
    fn test_num_frames_rounds_to_nearest() {
        let params = ToneParams::new(440.0, 0.5, 2.0);
        assert_eq!(params.num_frames(), 88200);

        // 44100 * 0.0005 = 22.05 frames, rounds down
        let short = ToneParams::new(440.0, 0.5, 0.0005);
        assert_eq!(short.num_frames(), 22);
    }

    #[test]
    fn test_validate_rejects_bad_frequency() {
        for freq in [0.0, -440.0, f64::NAN, f64::INFINITY] {
            let params = ToneParams::new(freq, 0.5, 1.0);
            let err = params.validate().unwrap_err();
            assert!(matches!(err, WavError::InvalidFrequency { .. }));
        }
    }

    #[test]
    fn test_validate_rejects_bad_amplitude() {
        for amplitude in [1.5, -1.5, f64::NAN, f64::NEG_INFINITY] {
            let params = ToneParams::new(440.0, amplitude, 1.0);
            let err = params.validate().unwrap_err();
            assert!(matches!(err, WavError::InvalidAmplitude { .. }));
        }
    }

    #[test]
    fn test_validate_accepts_full_scale_amplitude() {
        assert!(ToneParams::new(440.0, 1.0, 0.1).validate().is_ok());
        assert!(ToneParams::new(440.0, -1.0, 0.1).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_duration() {
        for duration in [-1.0, f64::NAN, f64::INFINITY] {
            let params = ToneParams::new(440.0, 0.5, duration);
            let err = params.validate().unwrap_err();
            assert!(matches!(err, WavError::InvalidDuration { .. }));
        }
    }

    #[test]
    fn test_validate_accepts_zero_duration() {
        assert!(ToneParams::new(440.0, 0.5, 0.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_oversized_render() {
        // A million seconds of 16-bit mono blows past the 32-bit size field
        let params = ToneParams::new(440.0, 0.5, 1_000_000.0);
        let err = params.validate().unwrap_err();
        assert!(matches!(err, WavError::DataTooLarge { .. }));
    }

    #[test]
    fn test_validate_rejects_bad_format() {
        let format = WavFormat {
            channels: 1,
            sample_rate: 44100,
            bits_per_sample: 24,
        };
        let params = ToneParams::with_format(440.0, 0.5, 1.0, format);
        let err = params.validate().unwrap_err();
        assert!(matches!(err, WavError::InvalidBitDepth { bits: 24 }));
    }

    #[test]
    fn test_render_zero_duration() {
        let params = ToneParams::new(440.0, 0.5, 0.0);
        let result = render(&params).expect("render should succeed");

        // Header only: empty data chunk, 44 bytes total
        assert_eq!(result.wav_data.len(), 44);
        assert_eq!(result.num_frames, 0);
        assert_eq!(result.duration_seconds(), 0.0);
        let data_size = u32::from_le_bytes([
            result.wav_data[40],
            result.wav_data[41],
            result.wav_data[42],
            result.wav_data[43],
        ]);
        assert_eq!(data_size, 0);
    }

    #[test]
    fn test_render_first_sample_is_zero() {
        let params = ToneParams::new(440.0, 0.5, 0.01);
        let result = render(&params).expect("render should succeed");

        // sin(0) = 0
        let first = i16::from_le_bytes([result.wav_data[44], result.wav_data[45]]);
        assert_eq!(first, 0);
    }

    #[test]
    fn test_render_payload_matches_oscillator() {
        let params = ToneParams::new(440.0, 0.5, 0.01);
        let result = render(&params).expect("render should succeed");

        let mut oscillator = SineOscillator::new(440.0, 0.5, 44100);
        let samples = oscillator.generate(params.num_frames() as usize);
        let expected = samples_to_pcm16(&samples);

        assert_eq!(&result.wav_data[44..], &expected[..]);
    }

    #[test]
    fn test_render_stereo_duplicates_channels() {
        let params = ToneParams::with_format(440.0, 0.5, 0.001, WavFormat::stereo(44100));
        let result = render(&params).expect("render should succeed");

        let payload = &result.wav_data[44..];
        assert_eq!(payload.len() % 4, 0);
        for frame in payload.chunks_exact(4) {
            assert_eq!(frame[0..2], frame[2..4]);
        }
    }

    #[test]
    fn test_render_to_matches_render() {
        let params = ToneParams::new(440.0, 0.5, 0.05);

        let in_memory = render(&params).expect("render should succeed");
        let streamed = render_to(&params, Cursor::new(Vec::new()))
            .expect("render_to should succeed")
            .into_inner();

        assert_eq!(in_memory.wav_data, streamed);
    }

    #[test]
    fn test_render_to_file_round_trip() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("tone.wav");

        let params = ToneParams::new(440.0, 0.5, 0.01);
        render_to_file(&params, &path).expect("render_to_file should succeed");

        let from_disk = std::fs::read(&path).expect("read file back");
        let in_memory = render(&params).expect("render should succeed");
        assert_eq!(from_disk, in_memory.wav_data);
    }
}
