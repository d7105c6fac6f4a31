//! # Bit Image Encoder
//!
//! Turns a [`Bitmap`] into a complete ESC/P print stream.
//!
//! ## Stream Layout
//!
//! ```text
//! 1B 41 n                      line spacing n/72 inch
//! ┌ 1B 4B|4C  lo hi            strip header (mode, width LE)
//! │ d0 d1 ... d(width-1)       one packed byte per column
//! └ 0D 0A                      CR LF
//!   ... repeated ceil(height/8) times ...
//! 1B 40                        reset
//! ```
//!
//! The output length is always `5 + ceil(height/8) * (6 + width)`: each strip
//! carries 4 header bytes, `width` data bytes and a 2-byte line end.
//!
//! Encoding never fails: any structurally valid bitmap has a stream. Widths
//! above 65535 cannot be expressed in the 16-bit header and are truncated to
//! their low 16 bits. Whether a width fits the paper is the caller's concern.

use crate::bitmap::Bitmap;
use crate::protocol::commands::CommandSet;
use crate::protocol::graphics::{self, ResolutionMode, STRIP_HEIGHT};

/// Line spacing that advances exactly one strip (8/72 inch).
pub const DEFAULT_LINE_SPACING: u8 = 8;

/// # Encoding Parameters
///
/// | Field | Default | Effect |
/// |-------|---------|--------|
/// | `resolution_mode` | `Mode60` | Strip header command byte |
/// | `line_spacing` | 8 | `ESC A n` parameter, in 1/72 inch |
///
/// ## Example
///
/// ```
/// use lx80::{EncodingConfig, ResolutionMode};
///
/// let config = EncodingConfig::default().with_mode(ResolutionMode::Mode120);
/// assert_eq!(config.line_spacing, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingConfig {
    pub resolution_mode: ResolutionMode,
    pub line_spacing: u8,
}

impl EncodingConfig {
    pub const fn new(resolution_mode: ResolutionMode) -> Self {
        Self {
            resolution_mode,
            line_spacing: DEFAULT_LINE_SPACING,
        }
    }

    pub const fn with_mode(mut self, resolution_mode: ResolutionMode) -> Self {
        self.resolution_mode = resolution_mode;
        self
    }

    pub const fn with_line_spacing(mut self, line_spacing: u8) -> Self {
        self.line_spacing = line_spacing;
        self
    }
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self::new(ResolutionMode::Mode60)
    }
}

/// Encode a bitmap with the standard ESC/P command bytes.
///
/// ## Example
///
/// ```
/// use lx80::{Bitmap, EncodingConfig, encode};
///
/// let dot = Bitmap::filled(1, 1, true);
/// let bytes = encode(&dot, EncodingConfig::default());
///
/// assert_eq!(bytes, vec![
///     0x1B, 0x41, 0x08,             // ESC A 8
///     0x1B, 0x4B, 0x01, 0x00, 0x80, // ESC K 1 0, one column
///     0x0D, 0x0A,                   // CR LF
///     0x1B, 0x40,                   // ESC @
/// ]);
/// ```
pub fn encode(bitmap: &Bitmap, config: EncodingConfig) -> Vec<u8> {
    encode_with(bitmap, config, CommandSet::ESC_P)
}

/// Encode a bitmap using an explicit command table.
pub fn encode_with(bitmap: &Bitmap, config: EncodingConfig, commands: CommandSet) -> Vec<u8> {
    let width = bitmap.width();
    let height = bitmap.height();

    let mut out = Vec::with_capacity(encoded_len(width, height));
    out.extend_from_slice(&commands.line_spacing(config.line_spacing));

    // Header width is 16 bits on the wire
    let header = commands.bit_image_header(config.resolution_mode, width as u16);

    for strip in 0..graphics::strip_count(height) {
        let top = strip * STRIP_HEIGHT;
        out.extend_from_slice(&header);
        out.extend((0..width).map(|x| graphics::pack_column(bitmap, x, top)));
        out.extend_from_slice(&commands.line_end());
    }

    out.extend_from_slice(&commands.reset());
    out
}

/// Exact length of the stream [`encode`] produces for a `width x height` bitmap.
///
/// ```
/// use lx80::encoder::encoded_len;
///
/// assert_eq!(encoded_len(0, 0), 5);
/// assert_eq!(encoded_len(480, 17), 5 + 3 * (6 + 480));
/// ```
#[inline]
pub const fn encoded_len(width: usize, height: usize) -> usize {
    3 + graphics::strip_count(height) * (6 + width) + 2
}

// ============================================================================
// TESTS
// ============================================================================
