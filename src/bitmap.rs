//! # Monochrome Bitmap
//!
//! The data model shared by every stage of the pipeline: a rectangular grid of
//! binary pixels stored row-major.
//!
//! ```text
//! (0,0) ──────────────► x (width)
//!   │   █ ░ ░ █
//!   │   ░ █ █ ░     █ = ink (true), ░ = blank (false)
//!   ▼   █ ░ ░ █
//!   y (height)
//! ```
//!
//! A bitmap is never mutated after construction. Transforms in
//! [`crate::preprocess`] always build a new one.

use crate::error::BitmapError;

/// Rectangular grid of ink/blank pixels.
///
/// ## Invariant
///
/// `width == 0` and `height == 0` are only valid together (the empty bitmap).
/// Otherwise both are positive and `pixels.len() == width * height`.
///
/// ## Example
///
/// ```
/// use lx80::Bitmap;
///
/// let bitmap = Bitmap::from_rows(&[
///     vec![true, false],
///     vec![false, true],
/// ]).unwrap();
///
/// assert_eq!(bitmap.width(), 2);
/// assert_eq!(bitmap.height(), 2);
/// assert!(bitmap.pixel_at(1, 1).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bitmap {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl Bitmap {
    /// The 0x0 bitmap.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a bitmap from row-major pixel data.
    ///
    /// Fails with [`BitmapError::MalformedBitmap`] if `pixels` does not hold
    /// exactly `width * height` values, or if only one dimension is zero.
    pub fn new(width: usize, height: usize, pixels: Vec<bool>) -> Result<Self, BitmapError> {
        if (width == 0) != (height == 0) {
            return Err(BitmapError::MalformedBitmap(format!(
                "{}x{} has a zero dimension but is not empty",
                width, height
            )));
        }

        if pixels.len() != width * height {
            return Err(BitmapError::MalformedBitmap(format!(
                "expected {} pixels for {}x{}, got {}",
                width * height,
                width,
                height,
                pixels.len()
            )));
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a bitmap from a list of rows.
    ///
    /// Every row must have the same length as the first one. An empty list
    /// produces the empty bitmap.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, BitmapError> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut pixels = Vec::with_capacity(width * rows.len());

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(BitmapError::MalformedBitmap(format!(
                    "row {} has {} pixels, expected {}",
                    y,
                    row.len(),
                    width
                )));
            }
            pixels.extend_from_slice(row);
        }

        Self::new(width, rows.len(), pixels)
    }

    /// A `width x height` bitmap with every pixel set to `ink`.
    ///
    /// A zero in either dimension yields the empty bitmap.
    pub fn filled(width: usize, height: usize, ink: bool) -> Self {
        Self::from_fn(width, height, |_, _| ink)
    }

    /// Build a bitmap by evaluating `f(x, y)` for every pixel.
    ///
    /// A zero in either dimension yields the empty bitmap.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> bool,
    {
        if width == 0 || height == 0 {
            return Self::empty();
        }

        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }

        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel value at `(x, y)`; `true` means ink.
    ///
    /// Fails with [`BitmapError::OutOfRange`] outside the grid.
    pub fn pixel_at(&self, x: usize, y: usize) -> Result<bool, BitmapError> {
        if x >= self.width || y >= self.height {
            return Err(BitmapError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.pixels[y * self.width + x])
    }

    /// Unchecked lookup for callers that iterate within bounds.
    #[inline]
    pub(crate) fn get(&self, x: usize, y: usize) -> bool {
        self.pixels[y * self.width + x]
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // chunks_exact panics on a zero chunk size
        self.pixels.chunks_exact(self.width.max(1))
    }

    /// Row-major pixel data.
    #[inline]
    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    /// Number of ink pixels.
    pub fn ink_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }
}

// ============================================================================
// TESTS
// ============================================================================
