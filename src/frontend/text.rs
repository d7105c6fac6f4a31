//! # ASCII Art Front End
//!
//! Reads a text grid where every character is one dot.
//!
//! ```text
//! *****        █████
//! *   *   ─►   █░░░█
//! *****        █████
//! ```
//!
//! Spaces and tabs are blank; every other character prints. Short lines are
//! padded with blanks to the longest line, counted in characters.

use std::fs;
use std::path::Path;

use crate::bitmap::Bitmap;
use crate::error::Lx80Error;

/// Whether a character prints a dot.
#[inline]
pub fn is_ink(c: char) -> bool {
    c != ' ' && c != '\t'
}

/// Parse ASCII art into a bitmap.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`, so files from any platform
/// read the same.
///
/// ## Errors
///
/// - [`Lx80Error::EmptyInput`] if the text has no lines.
/// - [`Lx80Error::BlankLines`] if every line is empty. Such art still has a
///   height, which [`crate::Conversion::prepare_blank`] can frame.
///
/// ## Example
///
/// ```
/// use lx80::frontend::text;
///
/// let bitmap = text::parse("*\n * *\n").unwrap();
/// assert_eq!((bitmap.width(), bitmap.height()), (4, 2));
/// assert_eq!(bitmap.ink_count(), 3);
/// ```
pub fn parse(text: &str) -> Result<Bitmap, Lx80Error> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<Vec<char>> = normalized
        .lines()
        .map(|line| line.chars().collect())
        .collect();

    if lines.is_empty() {
        return Err(Lx80Error::EmptyInput("text has no lines".to_string()));
    }

    let width = lines.iter().map(Vec::len).max().unwrap_or(0);
    if width == 0 {
        return Err(Lx80Error::BlankLines(lines.len()));
    }

    Ok(Bitmap::from_fn(width, lines.len(), |x, y| {
        lines[y].get(x).is_some_and(|&c| is_ink(c))
    }))
}

/// Read and parse an ASCII art file.
pub fn load(path: &Path) -> Result<Bitmap, Lx80Error> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

// ============================================================================
// TESTS
// ============================================================================
