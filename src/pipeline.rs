//! # Conversion Pipeline
//!
//! The one path every front end goes through:
//!
//! ```text
//! Bitmap ─► add_border? ─► scale ─► encode ─► bytes
//! ```
//!
//! The border is added before scaling, so it grows with the content: a
//! bordered image at scale 3 has a border 3 dots thick.

use crate::bitmap::Bitmap;
use crate::encoder::{self, EncodingConfig};
use crate::error::BitmapError;
use crate::preprocess;

/// Preprocessing and encoding options for one conversion.
///
/// ## Example
///
/// ```
/// use lx80::{Bitmap, Conversion};
///
/// let conversion = Conversion::default().border(true).scale(2);
/// let prepared = conversion.prepare(&Bitmap::filled(1, 1, false)).unwrap();
///
/// // 1x1 plus border = 3x3, doubled = 6x6
/// assert_eq!((prepared.width(), prepared.height()), (6, 6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    pub border: bool,
    pub scale: u32,
    pub encoding: EncodingConfig,
}

impl Default for Conversion {
    fn default() -> Self {
        Self {
            border: false,
            scale: 1,
            encoding: EncodingConfig::default(),
        }
    }
}

impl Conversion {
    pub fn new(encoding: EncodingConfig) -> Self {
        Self {
            encoding,
            ..Self::default()
        }
    }

    pub fn border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    pub fn scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    /// Apply the border (if requested) and then the scale factor.
    pub fn prepare(&self, bitmap: &Bitmap) -> Result<Bitmap, BitmapError> {
        if self.border {
            preprocess::scale(&preprocess::add_border(bitmap), self.scale)
        } else {
            preprocess::scale(bitmap, self.scale)
        }
    }

    /// Prepare a blank `width x height` area that has no pixels of its own.
    ///
    /// With a border this is the scaled frame around the area. Without one
    /// there is nothing to print and the result is the empty bitmap.
    pub fn prepare_blank(&self, width: usize, height: usize) -> Result<Bitmap, BitmapError> {
        if self.border {
            preprocess::scale(&preprocess::frame(width, height), self.scale)
        } else {
            preprocess::scale(&Bitmap::empty(), self.scale)
        }
    }

    /// Encode an already prepared bitmap.
    pub fn encode(&self, prepared: &Bitmap) -> Vec<u8> {
        encoder::encode(prepared, self.encoding)
    }

    /// Prepare and encode in one step.
    pub fn run(&self, bitmap: &Bitmap) -> Result<Vec<u8>, BitmapError> {
        let prepared = self.prepare(bitmap)?;
        Ok(self.encode(&prepared))
    }
}

// ============================================================================
// TESTS
// ============================================================================
