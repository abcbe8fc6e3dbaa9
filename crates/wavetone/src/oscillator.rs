//! Sine oscillator producing one amplitude sample per call.

use std::f64::consts::TAU;

/// Fixed-frequency sine oscillator.
///
/// The phase increment is computed once at construction; changing frequency
/// mid-stream is not supported. Each call to [`next_sample`](Self::next_sample)
/// returns the sample at the current phase and then advances the phase, so
/// the first sample is always `amplitude * sin(0) = 0`.
#[derive(Debug, Clone)]
pub struct SineOscillator {
    /// Oscillator frequency in Hz.
    frequency: f64,
    /// Peak amplitude, expected in [-1.0, 1.0].
    amplitude: f64,
    /// Current phase angle in radians.
    phase: f64,
    /// Phase advance per sample in radians.
    phase_increment: f64,
}

impl SineOscillator {
    /// Creates a new sine oscillator.
    ///
    /// # Arguments
    /// * `frequency` - Tone frequency in Hz
    /// * `amplitude` - Peak amplitude in [-1.0, 1.0]
    /// * `sample_rate` - Audio sample rate in Hz
    pub fn new(frequency: f64, amplitude: f64, sample_rate: u32) -> Self {
        Self {
            frequency,
            amplitude,
            phase: 0.0,
            phase_increment: TAU * frequency / sample_rate as f64,
        }
    }

    /// Returns the oscillator frequency in Hz.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Returns the peak amplitude.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Generates the next sample and advances the phase.
    ///
    /// The phase is kept in [0, 2π) after each advance so it stays bounded
    /// over arbitrarily long runs.
    pub fn next_sample(&mut self) -> f64 {
        let sample = self.amplitude * self.phase.sin();
        self.phase = (self.phase + self.phase_increment) % TAU;
        sample
    }

    /// Generates a buffer of samples.
    ///
    /// # Arguments
    /// * `num_samples` - Number of samples to generate
    ///
    /// # Returns
    /// Vector of amplitude samples in [-|amplitude|, |amplitude|]
    pub fn generate(&mut self, num_samples: usize) -> Vec<f64> {
        let mut output = Vec::with_capacity(num_samples);
        for _ in 0..num_samples {
            output.push(self.next_sample());
        }
        output
    }
}

/// The oscillator as an infinite sample stream; `next` never returns `None`.
impl Iterator for SineOscillator {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_sample())
    }
}
