//! Strict reading of the canonical WAV layout this crate writes.
//!
//! The reader accepts exactly one file shape: "RIFF", "WAVE", a 16-byte PCM
//! fmt chunk, then a single data chunk. Anything else (extra chunks,
//! compressed formats, extended fmt bodies) is rejected with a structured
//! error rather than parsed best-effort.

use std::io::Read;

use super::format::WavFormat;
use super::writer::HEADER_LEN;
use crate::error::{WavError, WavResult};

/// Parsed canonical WAV header fields, as read from the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// Total file size minus 8, from offset 4.
    pub riff_size: u32,
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bytes of audio data per second.
    pub byte_rate: u32,
    /// Bytes per sample frame.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Byte length of the sample payload, from offset 40.
    pub data_size: u32,
}

impl WavHeader {
    /// Reads and validates the 44-byte canonical header.
    ///
    /// The reader is left positioned at the first sample byte.
    ///
    /// # Errors
    ///
    /// Returns an error if a tag is wrong, the fmt chunk is not the 16-byte
    /// PCM shape, a field is invalid, the derived fields disagree with the
    /// fields they are computed from, or the source is truncated.
    pub fn read_from<R: Read>(reader: &mut R) -> WavResult<Self> {
        expect_tag(reader, b"RIFF")?;
        let riff_size = read_le_u32(reader)?;
        expect_tag(reader, b"WAVE")?;

        expect_tag(reader, b"fmt ")?;
        let fmt_size = read_le_u32(reader)?;
        if fmt_size != 16 {
            return Err(WavError::UnsupportedFmtChunkSize { size: fmt_size });
        }
        let compression = read_le_u16(reader)?;
        if compression != 1 {
            return Err(WavError::UnsupportedCompression { code: compression });
        }
        let channels = read_le_u16(reader)?;
        let sample_rate = read_le_u32(reader)?;
        let byte_rate = read_le_u32(reader)?;
        let block_align = read_le_u16(reader)?;
        let bits_per_sample = read_le_u16(reader)?;

        expect_tag(reader, b"data")?;
        let data_size = read_le_u32(reader)?;

        let header = Self {
            riff_size,
            channels,
            sample_rate,
            byte_rate,
            block_align,
            bits_per_sample,
            data_size,
        };
        header.validate()?;
        Ok(header)
    }

    /// Returns the format parameters carried by the header.
    pub fn format(&self) -> WavFormat {
        WavFormat {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: self.bits_per_sample,
        }
    }

    /// Number of sample frames in the payload.
    pub fn num_frames(&self) -> u32 {
        self.data_size / self.block_align as u32
    }

    /// Payload duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_frames() as f64 / self.sample_rate as f64
    }

    fn validate(&self) -> WavResult<()> {
        let format = self.format();
        format.validate()?;

        if self.block_align != format.block_align() {
            return Err(WavError::inconsistent_header(
                "block align",
                format.block_align() as u32,
                self.block_align as u32,
            ));
        }
        if self.byte_rate != format.byte_rate() {
            return Err(WavError::inconsistent_header(
                "byte rate",
                format.byte_rate(),
                self.byte_rate,
            ));
        }
        if self.data_size % self.block_align as u32 != 0 {
            return Err(WavError::inconsistent_header(
                "data chunk size",
                self.data_size - self.data_size % self.block_align as u32,
                self.data_size,
            ));
        }

        // The canonical layout has nothing between header and payload, so
        // the RIFF size is fully determined by the data size.
        let expected_riff = self.data_size.saturating_add(HEADER_LEN as u32 - 8);
        if self.riff_size != expected_riff {
            return Err(WavError::inconsistent_header(
                "RIFF chunk size",
                expected_riff,
                self.riff_size,
            ));
        }

        Ok(())
    }
}

/// Reads a canonical WAV file: validated header plus raw PCM payload.
///
/// Bytes after the declared payload length are left unread.
///
/// # Errors
///
/// Returns an error if the header is invalid or the payload is shorter than
/// the data size field declares.
pub fn read_wav<R: Read>(reader: &mut R) -> WavResult<(WavHeader, Vec<u8>)> {
    let header = WavHeader::read_from(reader)?;
    let mut data = vec![0u8; header.data_size as usize];
    reader.read_exact(&mut data)?;
    Ok((header, data))
}

fn expect_tag<R: Read>(reader: &mut R, expected: &[u8; 4]) -> WavResult<()> {
    let mut tag = [0u8; 4];
    reader.read_exact(&mut tag)?;
    if &tag != expected {
        return Err(WavError::unexpected_tag(expected, &tag));
    }
    Ok(())
}

fn read_le_u16<R: Read>(reader: &mut R) -> WavResult<u16> {
    let mut bytes = [0u8; 2];
    reader.read_exact(&mut bytes)?;
    Ok(u16::from_le_bytes(bytes))
}

fn read_le_u32<R: Read>(reader: &mut R) -> WavResult<u32> {
    let mut bytes = [0u8; 4];
    reader.read_exact(&mut bytes)?;
    Ok(u32::from_le_bytes(bytes))
}
