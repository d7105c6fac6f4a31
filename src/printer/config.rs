//! # Printer Configuration
//!
//! This module defines the hardware limits of supported dot-matrix printers.
//!
//! ## Supported Printers
//!
//! | Model | Line width | 60 dpi | 120 dpi | Pins |
//! |-------|------------|--------|---------|------|
//! | Epson LX-80 | 8 inch | 480 dots | 960 dots | 9 |
//!
//! These limits are policy for the front ends. The encoder itself accepts any
//! width.
//!
//! ## Usage
//!
//! ```
//! use lx80::printer::PrinterConfig;
//! use lx80::ResolutionMode;
//!
//! let config = PrinterConfig::LX80;
//! assert_eq!(config.line_dots(ResolutionMode::Mode60), 480);
//! assert_eq!(config.line_dots(ResolutionMode::Mode120), 960);
//! ```

use crate::protocol::graphics::ResolutionMode;

/// # Printer Configuration
///
/// - **line_width_inches**: printable line length
/// - **default_image_width**: width photographs are reduced to by default
/// - **max_width_dots**: widest graphics line the printer accepts in any mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrinterConfig {
    /// Printer model name
    pub name: &'static str,

    /// Printable line length in inches
    pub line_width_inches: f32,

    /// Default maximum width for converted images, in dots
    pub default_image_width: u32,

    /// Widest graphics line in dots (one full line at 120 dpi)
    pub max_width_dots: usize,
}

impl PrinterConfig {
    /// # Epson LX-80
    ///
    /// 9-pin dot-matrix printer with an 8 inch line. Graphics use the top 8
    /// pins.
    pub const LX80: Self = Self {
        name: "Epson LX-80",
        line_width_inches: 8.0,
        default_image_width: 480,
        max_width_dots: 960,
    };

    /// Dots in one full line at the given density.
    #[inline]
    pub fn line_dots(&self, mode: ResolutionMode) -> usize {
        (self.line_width_inches * mode.dpi() as f32).round() as usize
    }

    /// Printed width in inches of `dots` columns at the given density.
    #[inline]
    pub fn dots_to_inches(&self, dots: usize, mode: ResolutionMode) -> f32 {
        dots as f32 / mode.dpi() as f32
    }

    /// Whether a graphics line of `width` dots is within the printer's limit.
    #[inline]
    pub fn fits(&self, width: usize) -> bool {
        width <= self.max_width_dots
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::LX80
    }
}

// ============================================================================
// TESTS
// ============================================================================
