//! Core WAV writing: streaming writer with deferred size patching, plus a
//! one-shot writer for payloads whose length is known up front.

use std::io::{Seek, SeekFrom, Write};

use super::format::WavFormat;
use super::pcm::{sample_to_pcm, write_le_int};
use crate::error::{WavError, WavResult};

/// Byte length of the canonical header (RIFF header + fmt chunk + data
/// chunk preamble). Sample bytes start here.
pub const HEADER_LEN: u64 = 44;

/// Largest sample payload a 32-bit RIFF size field can describe.
const MAX_DATA_LEN: u64 = u32::MAX as u64 - (HEADER_LEN - 8);

/// Streaming WAV writer over any seekable sink.
///
/// The header goes out first with zeroed size fields, samples are appended
/// as they arrive, and [`finalize`](Self::finalize) seeks back to patch the
/// two size fields once the payload length is known. The sink must start at
/// stream position zero, since the RIFF size field is patched at absolute
/// offset 4. Dropping the writer without calling `finalize` leaves the
/// zeroed placeholders in place and the file invalid.
#[derive(Debug)]
pub struct WavWriter<W: Write + Seek> {
    writer: W,
    format: WavFormat,
    /// Stream position of the first sample byte.
    data_start: u64,
}

impl<W: Write + Seek> WavWriter<W> {
    /// Creates a writer and emits the header with placeholder size fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the format parameters are invalid or the header
    /// cannot be written.
    pub fn new(mut writer: W, format: WavFormat) -> WavResult<Self> {
        format.validate()?;
        write_header(&mut writer, &format, 0, 0)?;
        let data_start = writer.stream_position()?;
        Ok(Self {
            writer,
            format,
            data_start,
        })
    }

    /// Returns the format this writer encodes to.
    pub fn format(&self) -> WavFormat {
        self.format
    }

    /// Encodes one normalized sample and appends it to the sink.
    ///
    /// The sample is clipped to [-1.0, 1.0], scaled to the format's bit
    /// depth, and written as a little-endian signed integer.
    pub fn write_sample(&mut self, sample: f64) -> WavResult<()> {
        let value = sample_to_pcm(sample, self.format.max_amplitude());
        write_le_int(
            &mut self.writer,
            value,
            self.format.bytes_per_sample() as usize,
        )?;
        Ok(())
    }

    /// Encodes a slice of normalized samples in order.
    pub fn write_samples(&mut self, samples: &[f64]) -> WavResult<()> {
        for &sample in samples {
            self.write_sample(sample)?;
        }
        Ok(())
    }

    /// Patches the deferred size fields and returns the sink.
    ///
    /// The data size (at the four bytes before the payload) becomes the
    /// number of sample bytes written and the RIFF size (at offset 4)
    /// becomes the final stream position minus 8. The sink is left
    /// positioned at the end of the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload has outgrown the 32-bit size fields
    /// or a seek or write fails.
    pub fn finalize(mut self) -> WavResult<W> {
        let data_end = self.writer.stream_position()?;
        let data_len = data_end - self.data_start;
        if data_len > MAX_DATA_LEN {
            return Err(WavError::DataTooLarge { bytes: data_len });
        }

        self.writer.seek(SeekFrom::Start(self.data_start - 4))?;
        write_le_int(&mut self.writer, data_len as i64, 4)?;

        self.writer.seek(SeekFrom::Start(4))?;
        write_le_int(&mut self.writer, (data_end - 8) as i64, 4)?;

        self.writer.seek(SeekFrom::Start(data_end))?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Writes the 44-byte canonical header.
fn write_header<W: Write>(
    writer: &mut W,
    format: &WavFormat,
    riff_size: u32,
    data_size: u32,
) -> WavResult<()> {
    // RIFF header
    writer.write_all(b"RIFF")?;
    write_le_int(writer, riff_size as i64, 4)?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    write_le_int(writer, 16, 4)?; // Chunk size (16 for PCM)
    write_le_int(writer, 1, 2)?; // Audio format (1 = PCM)
    write_le_int(writer, format.channels as i64, 2)?;
    write_le_int(writer, format.sample_rate as i64, 4)?;
    write_le_int(writer, format.byte_rate() as i64, 4)?;
    write_le_int(writer, format.block_align() as i64, 2)?;
    write_le_int(writer, format.bits_per_sample as i64, 2)?;

    // data chunk preamble
    writer.write_all(b"data")?;
    write_le_int(writer, data_size as i64, 4)?;

    Ok(())
}

/// Writes a complete WAV file to a writer.
///
/// The payload length is known, so both size fields are computed up front
/// and no seeking is involved.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
///
/// # Errors
///
/// Returns an error if the format parameters are invalid, the payload is
/// too large for a 32-bit size field, or a write fails.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> WavResult<()> {
    format.validate()?;
    if pcm_data.len() as u64 > MAX_DATA_LEN {
        return Err(WavError::DataTooLarge {
            bytes: pcm_data.len() as u64,
        });
    }

    let data_size = pcm_data.len() as u32;
    let file_size = 36 + data_size; // Total file size minus 8 bytes for RIFF header

    write_header(writer, format, file_size, data_size)?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
///
/// # Arguments
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
///
/// # Errors
///
/// Returns an error if the format parameters are invalid or the payload is
/// too large for a 32-bit size field.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> WavResult<Vec<u8>> {
    let mut buffer = Vec::with_capacity(HEADER_LEN as usize + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data)?;
    Ok(buffer)
}
