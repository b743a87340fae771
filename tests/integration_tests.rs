//! Integration Tests
//!
//! End-to-end tests for the wavefx read/process/write pipeline.

use std::io::Cursor;

use pretty_assertions::assert_eq;
use wavefx::cli::{self, Cli};
use wavefx::engine::WaveFile;
use wavefx::WaveError;

/// Helper to build a canonical 44-byte-header stereo file by hand
fn wav_bytes(frames: &[(i16, i16)]) -> Vec<u8> {
    let data_size = (frames.len() * 4) as u32;
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(data_size + 36).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&2u16.to_le_bytes());
    bytes.extend_from_slice(&44100u32.to_le_bytes());
    bytes.extend_from_slice(&176400u32.to_le_bytes());
    bytes.extend_from_slice(&4u16.to_le_bytes());
    bytes.extend_from_slice(&16u16.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_size.to_le_bytes());
    for (left, right) in frames {
        bytes.extend_from_slice(&left.to_le_bytes());
        bytes.extend_from_slice(&right.to_le_bytes());
    }
    bytes
}

fn cli_with(ops: &[&str]) -> Cli {
    Cli {
        quiet: true,
        operations: ops.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

/// Run the driver in memory, returning output bytes or the error
fn run_bytes(ops: &[&str], input: &[u8]) -> Result<Vec<u8>, (WaveError, Vec<u8>)> {
    let mut output = Vec::new();
    let mut diag = Vec::new();
    match cli::execute(&cli_with(ops), &mut Cursor::new(input), &mut output, &mut diag) {
        Ok(()) => Ok(output),
        Err(err) => Err((err, output)),
    }
}

fn frames_of(bytes: &[u8]) -> Vec<(i16, i16)> {
    let file = WaveFile::read_from(&mut Cursor::new(bytes)).unwrap();
    file.buffer
        .left
        .iter()
        .copied()
        .zip(file.buffer.right.iter().copied())
        .collect()
}

// === Passthrough ===

#[test]
fn test_no_flags_is_byte_identical() {
    let input = wav_bytes(&[(1, 2), (3, 4)]);
    assert_eq!(input.len(), 52);
    assert_eq!(&input[40..44], &8u32.to_le_bytes());

    let output = run_bytes(&[], &input).unwrap();
    assert_eq!(output, input);
}

#[test]
fn test_empty_data_passthrough() {
    let input = wav_bytes(&[]);
    let output = run_bytes(&["-r", "-f", "-v", "2"], &input).unwrap();
    assert_eq!(output, input);
}

// === Validation failures ===

#[test]
fn test_mono_input_rejected_without_output() {
    let mut input = wav_bytes(&[(1, 2)]);
    input[22..24].copy_from_slice(&1u16.to_le_bytes());

    let (err, output) = run_bytes(&["-r"], &input).unwrap_err();
    assert_eq!(err.exit_code(), 6);
    assert!(output.is_empty());
}

#[test]
fn test_header_failures_exit_codes() {
    let good = wav_bytes(&[(1, 2)]);

    let (err, _) = run_bytes(&[], &good[..30]).unwrap_err();
    assert_eq!(err.exit_code(), 3);

    let mut bad = good.clone();
    bad[0..4].copy_from_slice(b"RIFX");
    assert_eq!(run_bytes(&[], &bad).unwrap_err().0.exit_code(), 3);

    let mut bad = good.clone();
    bad[12..16].copy_from_slice(b"FMT ");
    assert_eq!(run_bytes(&[], &bad).unwrap_err().0.exit_code(), 4);

    let mut bad = good.clone();
    bad[36..40].copy_from_slice(b"LIST");
    assert_eq!(run_bytes(&[], &bad).unwrap_err().0.exit_code(), 5);

    let mut bad = good.clone();
    bad[24..28].copy_from_slice(&48000u32.to_le_bytes());
    assert_eq!(run_bytes(&[], &bad).unwrap_err().0.exit_code(), 7);

    let mut bad = good.clone();
    bad[34..36].copy_from_slice(&8u16.to_le_bytes());
    assert_eq!(run_bytes(&[], &bad).unwrap_err().0.exit_code(), 8);
}

#[test]
fn test_data_size_mismatch() {
    let mut short = wav_bytes(&[(1, 2), (3, 4)]);
    short.truncate(short.len() - 2);
    let (err, output) = run_bytes(&[], &short).unwrap_err();
    assert_eq!(err.exit_code(), 9);
    assert!(output.is_empty());

    let mut long = wav_bytes(&[(1, 2)]);
    long.push(0);
    assert_eq!(run_bytes(&[], &long).unwrap_err().0.exit_code(), 9);
}

#[test]
fn test_header_errors_take_precedence() {
    // Invalid header and invalid argument: the header wins
    let mut mono = wav_bytes(&[(1, 2)]);
    mono[22..24].copy_from_slice(&1u16.to_le_bytes());
    let (err, output) = run_bytes(&["-s", "0"], &mono).unwrap_err();
    assert_eq!(err.exit_code(), 6);
    assert!(output.is_empty());

    assert_eq!(run_bytes(&["-x"], b"").unwrap_err().0.exit_code(), 3);
    assert_eq!(run_bytes(&["-v", "-2"], b"junk").unwrap_err().0.exit_code(), 3);

    let mut short = wav_bytes(&[(1, 2), (3, 4)]);
    short.truncate(short.len() - 1);
    assert_eq!(run_bytes(&["-e", "1"], &short).unwrap_err().0.exit_code(), 9);
}

#[test]
fn test_argument_errors_on_valid_input() {
    let input = wav_bytes(&[(1, 2)]);

    let (err, output) = run_bytes(&["-s", "0"], &input).unwrap_err();
    assert_eq!(err.exit_code(), 10);
    assert!(output.is_empty());

    assert_eq!(run_bytes(&["-q"], &input).unwrap_err().0.exit_code(), 1);
    assert_eq!(run_bytes(&["-o", "x"], &input).unwrap_err().0.exit_code(), 11);
    assert_eq!(run_bytes(&["-v", "-2"], &input).unwrap_err().0.exit_code(), 12);
    assert_eq!(run_bytes(&["-e", "1"], &input).unwrap_err().0.exit_code(), 13);
}

#[test]
fn test_option_after_operations_is_reported() {
    use clap::Parser;

    let cli = Cli::try_parse_from(["wavefx", "-i", "1", "--quiet"]).unwrap();
    assert!(!cli.quiet);

    let input = wav_bytes(&[(1, 2)]);
    let mut output = Vec::new();
    let mut diag = Vec::new();
    let err = cli::execute(&cli, &mut Cursor::new(&input), &mut output, &mut diag).unwrap_err();
    assert!(matches!(err, WaveError::MisplacedOption { ref option } if option == "--quiet"));
    assert_eq!(err.exit_code(), 1);
    assert!(output.is_empty());
}

// === Pipelines ===

#[test]
fn test_ordered_pipeline() {
    let input = wav_bytes(&[(100, -1), (200, -2), (300, -3), (400, -4)]);

    let output = run_bytes(&["-r", "-f", "-v", "2"], &input).unwrap();
    assert_eq!(
        frames_of(&output),
        vec![(-8, 800), (-6, 600), (-4, 400), (-2, 200)]
    );
}

#[test]
fn test_speed_then_reverse() {
    let input = wav_bytes(&[(0, 0), (1, 10), (2, 20), (3, 30), (4, 40), (5, 50)]);

    let output = run_bytes(&["-s", "2", "-r"], &input).unwrap();
    assert_eq!(frames_of(&output), vec![(4, 40), (2, 20), (0, 0)]);
    assert_eq!(&output[40..44], &12u32.to_le_bytes());
    assert_eq!(&output[4..8], &48u32.to_le_bytes());
}

#[test]
fn test_echo_resyncs_header() {
    // 0.001s at 44100Hz is a 44 sample delay
    let input = wav_bytes(&[(1000, -1000), (0, 0)]);

    let output = run_bytes(&["-e", "0.001", "0.5"], &input).unwrap();
    assert_eq!(output.len(), 44 + 46 * 4);
    assert_eq!(&output[40..44], &184u32.to_le_bytes());
    assert_eq!(&output[4..8], &220u32.to_le_bytes());

    let frames = frames_of(&output);
    assert_eq!(frames[0], (1000, -1000));
    assert_eq!(frames[44], (500, -500));
    assert_eq!(frames[45], (0, 0));
}

#[test]
fn test_fade_in_then_out_on_short_file() {
    let input = wav_bytes(&[(10000, 10000); 100]);

    let output = run_bytes(&["-i", "0.01", "-o", "0.01"], &input).unwrap();
    let frames = frames_of(&output);
    assert_eq!(frames.len(), 100);
    assert_eq!(frames[0], (0, 0));
}

#[test]
fn test_volume_saturates() {
    let input = wav_bytes(&[(20000, -20000), (100, -100)]);

    let output = run_bytes(&["-v", "4"], &input).unwrap();
    assert_eq!(frames_of(&output), vec![(32767, -32768), (400, -400)]);
}

// === Interop ===

#[test]
fn test_output_readable_by_hound() {
    let input = wav_bytes(&[(1, -1), (2, -2), (3, -3), (4, -4)]);
    let output = run_bytes(&["-s", "0.5", "-f"], &input).unwrap();

    let mut reader = hound::WavReader::new(Cursor::new(output)).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 2);
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(spec.bits_per_sample, 16);

    let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(
        samples,
        vec![-1, 1, -1, 1, -2, 2, -2, 2, -3, 3, -3, 3, -4, 4, -4, 4]
    );
}

// === File paths ===

#[test]
fn test_run_with_file_paths() {
    let dir = tempfile::tempdir().unwrap();
    let in_path = dir.path().join("in.wav");
    let out_path = dir.path().join("out.wav");
    std::fs::write(&in_path, wav_bytes(&[(5, 6), (7, 8)])).unwrap();

    let cli = Cli {
        input: Some(in_path),
        output: Some(out_path.clone()),
        ..cli_with(&["-f"])
    };
    cli::run(&cli).unwrap();

    let output = std::fs::read(&out_path).unwrap();
    assert_eq!(frames_of(&output), vec![(6, 5), (8, 7)]);
}

#[test]
fn test_failed_run_creates_no_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let in_path = dir.path().join("in.wav");
    let out_path = dir.path().join("out.wav");
    let mut bytes = wav_bytes(&[(5, 6)]);
    bytes[34..36].copy_from_slice(&24u16.to_le_bytes());
    std::fs::write(&in_path, bytes).unwrap();

    let cli = Cli {
        input: Some(in_path),
        output: Some(out_path.clone()),
        ..cli_with(&["-r"])
    };
    let err = cli::run(&cli).unwrap_err();
    assert_eq!(err.exit_code(), 8);
    assert!(!out_path.exists());
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let cli = Cli {
        input: Some(dir.path().join("missing.wav")),
        ..cli_with(&[])
    };
    let err = cli::run(&cli).unwrap_err();
    assert!(matches!(err, WaveError::Io(_)));
    assert_eq!(err.exit_code(), 14);
}
