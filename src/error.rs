//! # Error Types
//!
//! This module defines error types used throughout the lx80 library.
//!
//! The core (bitmap, preprocessing, encoding) only ever fails with
//! [`BitmapError`]. Every core error is an input-validity error detected
//! before a single byte is produced. [`Lx80Error`] wraps it together with the
//! failures that belong to the front ends (file access, image decoding, empty
//! input).

use thiserror::Error;

/// Errors raised by the bitmap core
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BitmapError {
    /// Pixel data does not describe a rectangular grid
    #[error("Malformed bitmap: {0}")]
    MalformedBitmap(String),

    /// Scale factor below 1
    #[error("Invalid scale factor {0}: must be at least 1")]
    InvalidScale(u32),

    /// Pixel coordinate outside the bitmap
    #[error("Pixel ({x}, {y}) is out of range for a {width}x{height} bitmap")]
    OutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Errors raised while reading an ESC/P stream back into a bitmap
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A command's parameters or data run past the end of the stream
    #[error("Stream truncated inside a command starting at byte {offset:#06x}")]
    Truncated { offset: usize },

    /// Graphics placed further down the paper than a preview can hold
    #[error("Graphics at byte {offset:#06x} start at row {row}, past the {limit}-row preview limit")]
    TooTall {
        offset: usize,
        row: usize,
        limit: usize,
    },
}

/// Main error type for lx80 operations
#[derive(Debug, Error)]
pub enum Lx80Error {
    /// Invalid bitmap or preprocessing request
    #[error(transparent)]
    Bitmap(#[from] BitmapError),

    /// Unreadable printer stream
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Image decoding or encoding error
    #[error("Image error: {0}")]
    Image(String),

    /// Input holds no pixels at all
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// ASCII art made only of empty lines: it has a height but no width
    #[error("Empty input: {0} lines without a single character")]
    BlankLines(usize),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
