//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::path::PathBuf;

use base_convert::converter::{ConversionOptions, Converter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::TempDir;

/// Turn off ANSI styling so captured output can be compared verbatim.
pub fn plain_output() {
    console::set_colors_enabled(false);
    console::set_colors_enabled_stderr(false);
}

/// Convert with the default alphabet, panicking on failure.
pub fn convert(input: &str, from: i64, to: i64) -> String {
    Converter::new()
        .convert(input, &ConversionOptions::new(from, to))
        .unwrap_or_else(|e| panic!("converting {input} from {from} to {to}: {e}"))
        .output
}

/// Write `lines` to a file inside `dir`, one per line.
pub fn create_lines_file(dir: &TempDir, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, lines.join("\n")).unwrap();
    path
}

/// Seeded generator so property failures are reproducible.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random decimal numeral with `len` digits and no leading zero.
pub fn random_decimal(rng: &mut StdRng, len: usize) -> String {
    let mut numeral = String::with_capacity(len);
    numeral.push(char::from(b'1' + rng.gen_range(0..9u8)));
    for _ in 1..len {
        numeral.push(char::from(b'0' + rng.gen_range(0..10u8)));
    }
    numeral
}

pub fn utf8(buf: Vec<u8>) -> String {
    String::from_utf8(buf).expect("output should be valid UTF-8")
}
