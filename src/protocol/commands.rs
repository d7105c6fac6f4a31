//! # ESC/P Protocol Commands
//!
//! This module holds the command bytes of the Epson ESC/P protocol that the
//! bit-image encoder emits, gathered into one [`CommandSet`] table.
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Single byte: `CR`, `LF`
//! - Two bytes: `ESC @`
//! - Multi-byte with parameters: `ESC A n`, `ESC K nL nH data...`
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - `u16` value 0x1234 is sent as bytes `[0x34, 0x12]`
//!
//! ## Reference
//!
//! Based on the "Epson LX-80 Operation Manual" ESC/P command summary.

use super::graphics::ResolutionMode;

// ============================================================================
// CONTROL BYTES
// ============================================================================

/// ESC (Escape) - Command prefix byte
pub const ESC: u8 = 0x1B;

/// CR (Carriage Return) - Return the print head to the left margin
pub const CR: u8 = 0x0D;

/// LF (Line Feed) - Advance paper by the current line spacing
pub const LF: u8 = 0x0A;

// ============================================================================
// COMMAND TABLE
// ============================================================================

/// # ESC/P Command Table
///
/// Every byte the encoder emits comes from this table. It is a plain `Copy`
/// value so that it can be handed to the encoder and inspected in tests.
///
/// | Field | Byte | Sequence | Meaning |
/// |-------|------|----------|---------|
/// | `escape` | 0x1B | ESC | Command prefix |
/// | `line_spacing` | 0x41 | ESC A n | Line spacing n/72 inch |
/// | `bit_image_60` | 0x4B | ESC K nL nH | 60 dpi bit image |
/// | `bit_image_120` | 0x4C | ESC L nL nH | 120 dpi bit image |
/// | `reset` | 0x40 | ESC @ | Initialize printer |
/// | `carriage_return` | 0x0D | CR | Head to left margin |
/// | `line_feed` | 0x0A | LF | Advance paper |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSet {
    pub escape: u8,
    pub line_spacing: u8,
    pub bit_image_60: u8,
    pub bit_image_120: u8,
    pub reset: u8,
    pub carriage_return: u8,
    pub line_feed: u8,
}

impl CommandSet {
    /// Standard ESC/P bytes understood by the LX-80 and compatibles.
    pub const ESC_P: Self = Self {
        escape: ESC,
        line_spacing: b'A',
        bit_image_60: b'K',
        bit_image_120: b'L',
        reset: b'@',
        carriage_return: CR,
        line_feed: LF,
    };

    /// Bit-image command byte for a resolution mode.
    #[inline]
    pub const fn bit_image_command(&self, mode: ResolutionMode) -> u8 {
        match mode {
            ResolutionMode::Mode60 => self.bit_image_60,
            ResolutionMode::Mode120 => self.bit_image_120,
        }
    }

    /// # Set Line Spacing (ESC A n)
    ///
    /// Sets the distance the paper advances on each `LF` to n/72 inch.
    /// With n = 8 one line feed moves exactly one 8-dot graphics strip.
    ///
    /// | Format  | Bytes    |
    /// |---------|----------|
    /// | ASCII   | ESC A n  |
    /// | Hex     | 1B 41 n  |
    ///
    /// ## Example
    ///
    /// ```
    /// use lx80::protocol::commands::CommandSet;
    ///
    /// assert_eq!(CommandSet::ESC_P.line_spacing(8), [0x1B, 0x41, 0x08]);
    /// ```
    #[inline]
    pub const fn line_spacing(&self, n: u8) -> [u8; 3] {
        [self.escape, self.line_spacing, n]
    }

    /// # Select Bit Image Mode (ESC K / ESC L nL nH)
    ///
    /// Header announcing `width` column bytes of graphics data.
    ///
    /// | Mode | Hex |
    /// |------|-----|
    /// | 60 dpi | 1B 4B nL nH |
    /// | 120 dpi | 1B 4C nL nH |
    ///
    /// ## Example
    ///
    /// ```
    /// use lx80::protocol::commands::CommandSet;
    /// use lx80::protocol::graphics::ResolutionMode;
    ///
    /// let header = CommandSet::ESC_P.bit_image_header(ResolutionMode::Mode120, 480);
    /// assert_eq!(header, [0x1B, 0x4C, 0xE0, 0x01]);
    /// ```
    #[inline]
    pub const fn bit_image_header(&self, mode: ResolutionMode, width: u16) -> [u8; 4] {
        let [nl, nh] = u16_le(width);
        [self.escape, self.bit_image_command(mode), nl, nh]
    }

    /// `CR LF`: back to the left margin and down one line.
    #[inline]
    pub const fn line_end(&self) -> [u8; 2] {
        [self.carriage_return, self.line_feed]
    }

    /// # Initialize Printer (ESC @)
    ///
    /// Returns the printer to its power-on defaults, including line spacing.
    ///
    /// | Format  | Bytes |
    /// |---------|-------|
    /// | ASCII   | ESC @ |
    /// | Hex     | 1B 40 |
    #[inline]
    pub const fn reset(&self) -> [u8; 2] {
        [self.escape, self.reset]
    }
}

impl Default for CommandSet {
    fn default() -> Self {
        Self::ESC_P
    }
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as little-endian bytes [low, high]
///
/// ## Example
///
/// ```
/// use lx80::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(480), [0xE0, 0x01]); // 480 = 0x01E0
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

// ============================================================================
// TESTS
// ============================================================================
