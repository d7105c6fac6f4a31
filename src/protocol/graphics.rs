//! # ESC/P Bit Image Graphics
//!
//! This module implements the column packing used by the `ESC K` and `ESC L`
//! bit-image commands of 9-pin Epson printers.
//!
//! ## Graphics Modes Overview
//!
//! | Mode | Command | Horizontal density | Dots per 8" line |
//! |------|---------|--------------------|------------------|
//! | Single density | ESC K | 60 dpi | 480 |
//! | Double density | ESC L | 120 dpi | 960 |
//!
//! The mode only changes how far the head moves between columns. The data
//! layout is identical in both modes.
//!
//! ## Strips
//!
//! The print head fires 8 pins per column, so the bitmap is printed in
//! horizontal strips 8 rows tall. A bitmap whose height is not a multiple of
//! 8 ends with a short strip whose missing rows are blank.
//!
//! ```text
//! rows 0-7    ┌──────────────────┐  strip 0
//! rows 8-15   ├──────────────────┤  strip 1
//! rows 16-18  ├──────────────────┤  strip 2 (3 rows + 5 blank)
//!             └──────────────────┘
//! ```
//!
//! ## Bit Packing
//!
//! Each data byte is one column of the strip:
//! - Bit 7 (MSB) = top pin (first row of the strip)
//! - Bit 0 (LSB) = 8th pin (last row of the strip)
//! - 1 = fire pin (ink), 0 = no dot
//!
//! ```text
//! row 0  █  bit 7
//! row 1  █  bit 6
//! row 2  ░  bit 5
//! row 3  ░  bit 4      => 0b1100_0001 = 0xC1
//! row 4  ░  bit 3
//! row 5  ░  bit 2
//! row 6  ░  bit 1
//! row 7  █  bit 0
//! ```

use std::fmt;
use std::str::FromStr;

use super::commands::CommandSet;
use crate::bitmap::Bitmap;

/// Rows covered by one pass of the print head.
pub const STRIP_HEIGHT: usize = 8;

/// # Bit Image Resolution Mode
///
/// A closed set: anything other than 60 or 120 is rejected when parsing, so a
/// typo can never silently select the wrong density.
///
/// ## Example
///
/// ```
/// use lx80::protocol::graphics::ResolutionMode;
///
/// let mode: ResolutionMode = "120".parse().unwrap();
/// assert_eq!(mode, ResolutionMode::Mode120);
/// assert_eq!(mode.command_byte(), 0x4C);
/// assert!("12O".parse::<ResolutionMode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResolutionMode {
    /// Single density, `ESC K`
    #[default]
    Mode60,
    /// Double density, `ESC L`
    Mode120,
}

impl ResolutionMode {
    /// Command byte following `ESC` in the strip header.
    #[inline]
    pub const fn command_byte(self) -> u8 {
        CommandSet::ESC_P.bit_image_command(self)
    }

    /// Nominal horizontal dots per inch.
    #[inline]
    pub const fn dpi(self) -> u16 {
        match self {
            Self::Mode60 => 60,
            Self::Mode120 => 120,
        }
    }
}

impl fmt::Display for ResolutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} dpi", self.dpi())
    }
}

impl FromStr for ResolutionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "60" => Ok(Self::Mode60),
            "120" => Ok(Self::Mode120),
            other => Err(format!(
                "unknown resolution '{}', expected 60 or 120",
                other
            )),
        }
    }
}

/// Number of strips needed for `height` rows: `ceil(height / 8)`.
///
/// ```
/// use lx80::protocol::graphics::strip_count;
///
/// assert_eq!(strip_count(0), 0);
/// assert_eq!(strip_count(8), 1);
/// assert_eq!(strip_count(9), 2);
/// ```
#[inline]
pub const fn strip_count(height: usize) -> usize {
    height.div_ceil(STRIP_HEIGHT)
}

/// Pack column `x` of the strip starting at row `strip_top` into one byte.
///
/// Rows at or past the bitmap's height contribute unset bits, and so do
/// columns at or past its width: an out-of-range column packs to 0.
///
/// ## Example
///
/// ```
/// use lx80::Bitmap;
/// use lx80::protocol::graphics::pack_column;
///
/// // Three rows of ink: the top three bits are set
/// let bitmap = Bitmap::filled(1, 3, true);
/// assert_eq!(pack_column(&bitmap, 0, 0), 0xE0);
/// ```
pub fn pack_column(bitmap: &Bitmap, x: usize, strip_top: usize) -> u8 {
    if x >= bitmap.width() {
        return 0;
    }

    let rows = bitmap
        .height()
        .saturating_sub(strip_top)
        .min(STRIP_HEIGHT);

    let mut byte = 0u8;
    for bit in 0..rows {
        if bitmap.get(x, strip_top + bit) {
            byte |= 0x80u8 >> bit; // MSB first
        }
    }
    byte
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_bytes() {
        assert_eq!(ResolutionMode::Mode60.command_byte(), 0x4B);
        assert_eq!(ResolutionMode::Mode120.command_byte(), 0x4C);
        assert_ne!(
            ResolutionMode::Mode60.command_byte(),
            ResolutionMode::Mode120.command_byte()
        );
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("60".parse::<ResolutionMode>(), Ok(ResolutionMode::Mode60));
        assert_eq!(" 120 ".parse::<ResolutionMode>(), Ok(ResolutionMode::Mode120));
        assert!("90".parse::<ResolutionMode>().is_err());
        assert!("".parse::<ResolutionMode>().is_err());
    }

    #[test]
    fn test_default_mode() {
        assert_eq!(ResolutionMode::default(), ResolutionMode::Mode60);
    }

    #[test]
    fn test_display() {
        assert_eq!(ResolutionMode::Mode60.to_string(), "60 dpi");
        assert_eq!(ResolutionMode::Mode120.to_string(), "120 dpi");
    }

    #[test]
    fn test_strip_count() {
        assert_eq!(strip_count(0), 0);
        assert_eq!(strip_count(1), 1);
        assert_eq!(strip_count(7), 1);
        assert_eq!(strip_count(8), 1);
        assert_eq!(strip_count(16), 2);
        assert_eq!(strip_count(17), 3);
    }

    #[test]
    fn test_pack_full_strip() {
        assert_eq!(pack_column(&Bitmap::filled(1, 8, true), 0, 0), 0xFF);
        assert_eq!(pack_column(&Bitmap::filled(1, 8, false), 0, 0), 0x00);
    }

    #[test]
    fn test_pack_top_row_only() {
        let bitmap = Bitmap::from_fn(4, 8, |_, y| y == 0);
        for x in 0..4 {
            assert_eq!(pack_column(&bitmap, x, 0), 0x80);
        }
    }

    #[test]
    fn test_pack_bottom_row_only() {
        let bitmap = Bitmap::from_fn(1, 8, |_, y| y == 7);
        assert_eq!(pack_column(&bitmap, 0, 0), 0x01);
    }

    #[test]
    fn test_pack_short_strip() {
        let bitmap = Bitmap::filled(2, 3, true);
        assert_eq!(pack_column(&bitmap, 0, 0), 0xE0);
        assert_eq!(pack_column(&bitmap, 1, 0), 0xE0);
    }

    #[test]
    fn test_pack_second_strip() {
        // 10 rows: strip 1 covers rows 8 and 9 only
        let bitmap = Bitmap::from_fn(1, 10, |_, y| y == 9);
        assert_eq!(pack_column(&bitmap, 0, 0), 0x00);
        assert_eq!(pack_column(&bitmap, 0, 8), 0x40);
    }

    #[test]
    fn test_pack_column_pattern() {
        let rows = [true, true, false, false, false, false, false, true];
        let bitmap = Bitmap::from_fn(1, 8, |_, y| rows[y]);
        assert_eq!(pack_column(&bitmap, 0, 0), 0xC1);
    }

    #[test]
    fn test_pack_column_past_width_is_blank() {
        let bitmap = Bitmap::filled(3, 8, true);
        assert_eq!(pack_column(&bitmap, 3, 0), 0x00);
        assert_eq!(pack_column(&bitmap, usize::MAX, 0), 0x00);
        assert_eq!(pack_column(&Bitmap::empty(), 0, 0), 0x00);
    }
}
