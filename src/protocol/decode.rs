//! # ESC/P Bit Image Decoder
//!
//! Reads a printer stream back into a [`Bitmap`] by simulating the print head.
//! This is what makes `lx80 preview` possible: any `.prn` file made of
//! `ESC K` / `ESC L` graphics can be turned back into a picture.
//!
//! ## Head Model
//!
//! ```text
//! x: column, advanced by one per graphics byte
//! y: row in 1/72 inch, advanced by the line spacing on LF
//!
//!  CR        -> x = 0
//!  LF        -> y += spacing
//!  ESC A n   -> spacing = n
//!  ESC 0/1/2 -> spacing = 9 / 7 / 12
//!  ESC 3 n   -> spacing = round(n / 3)
//!  ESC @     -> spacing = 12 (power-on default)
//!  ESC K/L/Y -> nL nH, then nL + 256*nH column bytes
//! ```
//!
//! Columns are plotted one dot apart whatever the density, so a 120 dpi image
//! previews at the same size in dots as a 60 dpi one.
//!
//! Other commands are skipped without interpretation. Text bytes are ignored.
//!
//! The canvas holds at most [`MAX_ROWS`] rows. Graphics that would land below
//! that, for example after a long run of line feeds, fail with
//! [`DecodeError::TooTall`] instead of allocating an enormous image.

use super::commands::{CR, ESC, LF};
use super::graphics::{ResolutionMode, STRIP_HEIGHT};
use crate::bitmap::Bitmap;
use crate::error::DecodeError;

/// Line spacing after power-on or `ESC @` (1/6 inch).
pub const POWER_ON_LINE_SPACING: u8 = 12;

/// Tallest preview in rows (1/72 inch each): about 75 feet of paper.
pub const MAX_ROWS: usize = 1 << 16;

/// `ESC Y`: double density at double speed, same data layout as `ESC L`.
const BIT_IMAGE_120_FAST: u8 = b'Y';

/// Result of decoding a stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Every dot the stream prints. Graphics are plotted in whole strips, so
    /// the height is a multiple of 8 for a stream made by the encoder.
    pub bitmap: Bitmap,
    /// Distinct graphics modes in order of first use.
    pub modes: Vec<ResolutionMode>,
    /// Line spacing in effect at the end of the stream.
    pub line_spacing: u8,
    /// Number of bit-image commands.
    pub strips: usize,
}

/// Ink plotted so far, grown on demand.
#[derive(Default)]
struct Canvas {
    rows: Vec<Vec<bool>>,
    width: usize,
}

impl Canvas {
    fn plot_column(&mut self, x: usize, y: usize, byte: u8) {
        if self.rows.len() < y + STRIP_HEIGHT {
            self.rows.resize_with(y + STRIP_HEIGHT, Vec::new);
        }
        self.width = self.width.max(x + 1);

        for bit in 0..STRIP_HEIGHT {
            if byte & (0x80u8 >> bit) != 0 {
                let row = &mut self.rows[y + bit];
                if row.len() <= x {
                    row.resize(x + 1, false);
                }
                row[x] = true;
            }
        }
    }

    fn into_bitmap(self) -> Bitmap {
        let rows = self.rows;
        Bitmap::from_fn(self.width, rows.len(), |x, y| {
            rows[y].get(x).copied().unwrap_or(false)
        })
    }
}

/// Decode an ESC/P stream.
///
/// ## Errors
///
/// - [`DecodeError::Truncated`] if the stream ends inside a command.
/// - [`DecodeError::TooTall`] if graphics would reach past [`MAX_ROWS`].
///
/// ## Example
///
/// ```
/// use lx80::{Bitmap, EncodingConfig, encode};
/// use lx80::protocol::decode;
///
/// let source = Bitmap::filled(3, 8, true);
/// let decoded = decode::parse(&encode(&source, EncodingConfig::default())).unwrap();
///
/// assert_eq!(decoded.bitmap, source);
/// assert_eq!(decoded.strips, 1);
/// ```
pub fn parse(data: &[u8]) -> Result<Decoded, DecodeError> {
    let mut canvas = Canvas::default();
    let mut modes = Vec::new();
    let mut strips = 0;
    let mut spacing = POWER_ON_LINE_SPACING;
    let mut x = 0usize;
    let mut y = 0usize;
    let mut pos = 0usize;

    while pos < data.len() {
        let start = pos;
        let byte = data[pos];
        pos += 1;

        match byte {
            CR => x = 0,
            LF => y += spacing as usize,
            ESC => {
                let command = take(data, &mut pos, 1, start)?[0];
                match command {
                    b'A' => spacing = take(data, &mut pos, 1, start)?[0],
                    b'3' => {
                        let n = take(data, &mut pos, 1, start)?[0];
                        spacing = ((n as u16 + 1) / 3) as u8;
                    }
                    b'0' => spacing = 9,
                    b'1' => spacing = 7,
                    b'2' => spacing = 12,
                    b'@' => spacing = POWER_ON_LINE_SPACING,
                    b'K' | b'L' | BIT_IMAGE_120_FAST => {
                        let mode = if command == b'K' {
                            ResolutionMode::Mode60
                        } else {
                            ResolutionMode::Mode120
                        };
                        if !modes.contains(&mode) {
                            modes.push(mode);
                        }

                        let count = take(data, &mut pos, 2, start)?;
                        let count = u16::from_le_bytes([count[0], count[1]]) as usize;
                        if count > 0 && y + STRIP_HEIGHT > MAX_ROWS {
                            return Err(DecodeError::TooTall {
                                offset: start,
                                row: y,
                                limit: MAX_ROWS,
                            });
                        }
                        for &column in take(data, &mut pos, count, start)? {
                            canvas.plot_column(x, y, column);
                            x += 1;
                        }
                        strips += 1;
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }

    Ok(Decoded {
        bitmap: canvas.into_bitmap(),
        modes,
        line_spacing: spacing,
        strips,
    })
}

/// Consume `n` bytes, or report the command starting at `start` as truncated.
fn take<'a>(
    data: &'a [u8],
    pos: &mut usize,
    n: usize,
    start: usize,
) -> Result<&'a [u8], DecodeError> {
    let end = *pos + n;
    let slice = data
        .get(*pos..end)
        .ok_or(DecodeError::Truncated { offset: start })?;
    *pos = end;
    Ok(slice)
}

// ============================================================================
// TESTS
// ============================================================================
