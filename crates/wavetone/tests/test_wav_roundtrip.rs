//! WAV container round-trip integration tests.
//!
//! Output is cross-checked against the `hound` WAV library in both
//! directions, then round-tripped through real files on disk.

use std::fs::File;
use std::io::Cursor;

use pretty_assertions::assert_eq;
use wavetone::wav::{pcm16_to_samples, pcm_hash, samples_to_pcm, write_wav_to_vec};
use wavetone::{read_wav, render, render_to_file, ToneParams, WavFormat, WavWriter};

#[test]
fn test_hound_reads_rendered_tone() {
    let params = ToneParams::new(440.0, 0.5, 2.0);
    let result = render(&params).expect("render should succeed");

    let mut reader =
        hound::WavReader::new(Cursor::new(&result.wav_data)).expect("hound should accept output");

    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);

    let samples: Vec<i16> = reader
        .samples::<i16>()
        .collect::<Result<_, _>>()
        .expect("samples should decode");
    assert_eq!(samples.len(), 88200);

    // hound must see the same payload our own decoder sees
    let own: Vec<i16> = result.wav_data[44..]
        .chunks_exact(2)
        .map(|chunk| i16::from_le_bytes([chunk[0], chunk[1]]))
        .collect();
    assert_eq!(samples, own);
}

#[test]
fn test_own_reader_accepts_hound_output() {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 22050,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut buffer = Cursor::new(Vec::new());
    let mut writer = hound::WavWriter::new(&mut buffer, spec).expect("hound writer");
    for value in [0i16, 1000, -1000, i16::MAX, i16::MIN] {
        writer.write_sample(value).expect("write sample");
    }
    writer.finalize().expect("finalize");

    buffer.set_position(0);
    let (header, payload) = read_wav(&mut buffer).expect("header should parse");

    assert_eq!(header.format(), WavFormat::mono(22050));
    assert_eq!(header.num_frames(), 5);
    assert_eq!(payload.len(), 10);
    assert_eq!(i16::from_le_bytes([payload[0], payload[1]]), 0);
    assert_eq!(i16::from_le_bytes([payload[6], payload[7]]), i16::MAX);
}

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("roundtrip.wav");

    let params = ToneParams::new(330.0, 0.7, 0.5);
    render_to_file(&params, &path).expect("render to file");

    let mut file = File::open(&path).expect("open rendered file");
    let (header, payload) = read_wav(&mut file).expect("read rendered file");

    assert_eq!(header.format(), WavFormat::mono(44100));
    assert_eq!(header.num_frames(), 22050);
    assert_eq!(header.data_size as usize, payload.len());
    assert!((header.duration_seconds() - 0.5).abs() < 1e-9);

    // Same parameters produce the same payload hash in memory
    let in_memory = render(&params).expect("in-memory render");
    assert_eq!(pcm_hash(&payload), in_memory.pcm_hash);
}

#[test]
fn test_streaming_writer_to_real_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("streamed.wav");

    let format = WavFormat::mono(8000);
    let file = File::create(&path).expect("create file");
    let mut writer = WavWriter::new(file, format).expect("writer should initialize");
    writer
        .write_samples(&[0.0, 0.5, -0.5, 1.0, -1.0])
        .expect("write samples");
    writer.finalize().expect("finalize");

    let mut file = File::open(&path).expect("reopen file");
    let (header, payload) = read_wav(&mut file).expect("read streamed file");

    assert_eq!(header.format(), format);
    let samples = pcm16_to_samples(&payload);
    assert_eq!(samples.len(), 5);
    assert!((samples[1] - 0.5).abs() < 1e-4);
    assert!((samples[4] + 1.0).abs() < 1e-4);
}

#[test]
fn test_attenuate_and_rewrite() {
    // Read a rendered file, halve every sample, write it back out
    let params = ToneParams::new(440.0, 1.0, 0.1);
    let original = render(&params).expect("render");

    let (header, payload) =
        read_wav(&mut Cursor::new(&original.wav_data)).expect("read rendered tone");

    let halved: Vec<u8> = payload
        .chunks_exact(2)
        .flat_map(|chunk| {
            let sample = i16::from_le_bytes([chunk[0], chunk[1]]);
            (sample / 2).to_le_bytes()
        })
        .collect();

    let quiet = write_wav_to_vec(&header.format(), &halved).expect("rewrite");
    let (quiet_header, quiet_payload) =
        read_wav(&mut Cursor::new(&quiet)).expect("read rewritten file");

    assert_eq!(quiet_header.format(), header.format());
    assert_eq!(quiet_payload.len(), payload.len());

    let loud_peak = payload
        .chunks_exact(2)
        .map(|c| i16::from_le_bytes([c[0], c[1]]).unsigned_abs())
        .max()
        .unwrap_or(0);
    let quiet_peak = quiet_payload
        .chunks_exact(2)
        .map(|c| i16::from_le_bytes([c[0], c[1]]).unsigned_abs())
        .max()
        .unwrap_or(0);
    assert_eq!(quiet_peak, loud_peak / 2);
}

#[test]
fn test_pcm_decode_matches_hound_float_view() {
    let format = WavFormat::mono(44100);
    let samples = [0.0, 0.25, -0.25, 0.999, -0.999];
    let pcm = samples_to_pcm(&samples, &format).expect("encode");
    let wav = write_wav_to_vec(&format, &pcm).expect("write");

    let mut reader = hound::WavReader::new(Cursor::new(&wav)).expect("hound reader");
    let max_val = (1i32 << (reader.spec().bits_per_sample - 1)) as f64;
    let hound_floats: Vec<f64> = reader
        .samples::<i16>()
        .map(|s| s.expect("sample") as f64 / max_val)
        .collect();

    let own_floats = pcm16_to_samples(&pcm);
    assert_eq!(hound_floats.len(), own_floats.len());
    for (a, b) in hound_floats.iter().zip(own_floats.iter()) {
        // hound normalizes by 2^15 where we normalize by 2^15 - 1
        assert!((a - b).abs() < 1e-4);
    }
}
