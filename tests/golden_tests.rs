//! # Golden Tests
//!
//! These tests pin the exact bytes of complete print files built from the
//! ASCII-art fixtures in `tests/fixtures`.
//!
//! ## Test Coverage
//!
//! - **Binary tests** (`.bin`): one fixture per interesting path through the
//!   converter (plain, border + scale, 120 dpi, CR LF input with tabs).
//! - **Decode tests**: every golden file is read back through the stream
//!   decoder and must reproduce the bitmap it was encoded from.
//!
//! ## Regenerating Golden Files
//!
//! ```bash
//! cargo test --test golden_tests -- --ignored generate_golden_files
//! ```

use lx80::frontend::text;
use lx80::protocol::decode;
use lx80::{Bitmap, Conversion, EncodingConfig, Lx80Error, ResolutionMode, encode};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

/// Path to golden test directory
const GOLDEN_DIR: &str = "tests/golden";

/// Path to the ASCII-art inputs
const FIXTURE_DIR: &str = "tests/fixtures";

/// Every golden file: name, fixture, resolution, border, scale.
const CASES: &[(&str, &str, ResolutionMode, bool, u32)] = &[
    ("box_60", "box.txt", ResolutionMode::Mode60, false, 1),
    ("box_border_scale3_60", "box.txt", ResolutionMode::Mode60, true, 3),
    ("star_60", "star.txt", ResolutionMode::Mode60, false, 1),
    ("star_border_scale2_120", "star.txt", ResolutionMode::Mode120, true, 2),
    ("crlf_120", "crlf.txt", ResolutionMode::Mode120, false, 1),
];

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn load_fixture(file: &str) -> Bitmap {
    let path = Path::new(FIXTURE_DIR).join(file);
    text::load(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

fn conversion_for(mode: ResolutionMode, border: bool, scale: u32) -> Conversion {
    Conversion::new(EncodingConfig::new(mode))
        .border(border)
        .scale(scale)
}

/// Build the print file for one golden case.
fn generate(name: &str) -> Vec<u8> {
    let &(_, fixture, mode, border, scale) = CASES
        .iter()
        .find(|case| case.0 == name)
        .unwrap_or_else(|| panic!("Unknown golden case: {}", name));

    conversion_for(mode, border, scale)
        .run(&load_fixture(fixture))
        .expect("Conversion failed")
}

/// Write a golden file
fn write_golden(name: &str, data: &[u8]) {
    let path = format!("{}/{}.bin", GOLDEN_DIR, name);
    fs::write(&path, data).unwrap_or_else(|e| panic!("Failed to write {}: {}", path, e));
    println!("Wrote {} ({} bytes)", path, data.len());
}

/// Compare data against a golden file
fn check_golden(name: &str, data: &[u8]) {
    let path = format!("{}/{}.bin", GOLDEN_DIR, name);
    let golden = fs::read(&path).unwrap_or_else(|_| {
        panic!(
            "Golden file not found: {}. Run the ignored `generate_golden_files` test.",
            path
        )
    });

    if data.len() != golden.len() {
        panic!(
            "Golden file size mismatch for {}:\n\
             - Golden: {} bytes\n\
             - Actual: {} bytes\n\
             Regenerate if this change is intentional.",
            path,
            golden.len(),
            data.len()
        );
    }

    if data != golden {
        let first_diff = data
            .iter()
            .zip(golden.iter())
            .position(|(a, b)| a != b)
            .unwrap_or(data.len());

        panic!(
            "Golden file content mismatch for {}:\n\
             - First difference at byte {:#06x} (golden {:#04x}, actual {:#04x})\n\
             Regenerate if this change is intentional.",
            path, first_diff, golden[first_diff], data[first_diff]
        );
    }
}

// ============================================================================
// GOLDEN FILE GENERATION
// ============================================================================

#[test]
#[ignore]
fn generate_golden_files() {
    for &(name, ..) in CASES {
        write_golden(name, &generate(name));
    }
}

// ============================================================================
// BINARY GOLDEN TESTS
// ============================================================================

#[test]
fn test_box_60() {
    check_golden("box_60", &generate("box_60"));
}

#[test]
fn test_box_border_scale3_60() {
    check_golden("box_border_scale3_60", &generate("box_border_scale3_60"));
}

#[test]
fn test_star_60() {
    check_golden("star_60", &generate("star_60"));
}

#[test]
fn test_star_border_scale2_120() {
    check_golden("star_border_scale2_120", &generate("star_border_scale2_120"));
}

#[test]
fn test_crlf_120() {
    check_golden("crlf_120", &generate("crlf_120"));
}

#[test]
fn test_box_60_bytes() {
    // Three rows of art fit one short strip: top and bottom rows are solid
    let data = generate("box_60");
    assert_eq!(
        data,
        vec![
            0x1B, 0x41, 0x08, // ESC A 8
            0x1B, 0x4B, 0x05, 0x00, // ESC K, 5 columns
            0xE0, 0xA0, 0xA0, 0xA0, 0xE0, // columns
            0x0D, 0x0A, // CR LF
            0x1B, 0x40, // ESC @
        ]
    );
}

// ============================================================================
// STREAM PROPERTIES
// ============================================================================

#[test]
fn test_single_dot_end_to_end() {
    let dot = Bitmap::filled(1, 1, true);
    let data = Conversion::default().run(&dot).unwrap();
    assert_eq!(
        data,
        vec![0x1B, 0x41, 0x08, 0x1B, 0x4B, 0x01, 0x00, 0x80, 0x0D, 0x0A, 0x1B, 0x40]
    );
}

#[test]
fn test_lone_cr_splits_lines_end_to_end() {
    let art = text::parse("*\r*\n").unwrap();
    let data = Conversion::default().run(&art).unwrap();
    assert_eq!(
        data,
        vec![0x1B, 0x41, 0x08, 0x1B, 0x4B, 0x01, 0x00, 0xC0, 0x0D, 0x0A, 0x1B, 0x40]
    );
}

#[test]
fn test_empty_lines_with_border_end_to_end() {
    let conversion = Conversion::default().border(true);
    let lines = match text::parse("\n\n") {
        Err(Lx80Error::BlankLines(lines)) => lines,
        other => panic!("expected BlankLines, got {:?}", other),
    };
    let data = conversion.encode(&conversion.prepare_blank(0, lines).unwrap());
    assert_eq!(
        data,
        vec![0x1B, 0x41, 0x08, 0x1B, 0x4B, 0x02, 0x00, 0xF0, 0xF0, 0x0D, 0x0A, 0x1B, 0x40]
    );
}

#[test]
fn test_golden_lengths() {
    for &(name, fixture, mode, border, scale) in CASES {
        let prepared = conversion_for(mode, border, scale)
            .prepare(&load_fixture(fixture))
            .unwrap();
        let expected = 5 + prepared.height().div_ceil(8) * (6 + prepared.width());
        assert_eq!(generate(name).len(), expected, "{}", name);
    }
}

#[test]
fn test_modes_differ_only_in_headers() {
    let art = load_fixture("star.txt");
    let single = encode(&art, EncodingConfig::new(ResolutionMode::Mode60));
    let double = encode(&art, EncodingConfig::new(ResolutionMode::Mode120));

    let diffs: Vec<(u8, u8)> = single
        .iter()
        .zip(double.iter())
        .filter(|(a, b)| a != b)
        .map(|(&a, &b)| (a, b))
        .collect();
    assert_eq!(diffs, vec![(0x4B, 0x4C); art.height().div_ceil(8)]);
}

// ============================================================================
// DECODE ROUND TRIP
// ============================================================================

#[test]
fn test_golden_files_decode_to_prepared_bitmap() {
    for &(name, fixture, mode, border, scale) in CASES {
        let prepared = conversion_for(mode, border, scale)
            .prepare(&load_fixture(fixture))
            .unwrap();
        let golden = fs::read(format!("{}/{}.bin", GOLDEN_DIR, name)).unwrap();
        let decoded = decode::parse(&golden).unwrap();

        let strips = prepared.height().div_ceil(8);
        assert_eq!(decoded.strips, strips, "{}", name);
        assert_eq!(decoded.modes, vec![mode], "{}", name);
        assert_eq!(decoded.bitmap.width(), prepared.width(), "{}", name);

        // Decoded height is padded to whole strips; padding rows are blank
        for y in 0..decoded.bitmap.height() {
            for x in 0..prepared.width() {
                let expected = y < prepared.height() && prepared.pixel_at(x, y).unwrap();
                assert_eq!(
                    decoded.bitmap.pixel_at(x, y).unwrap(),
                    expected,
                    "{} at ({}, {})",
                    name,
                    x,
                    y
                );
            }
        }
    }
}
