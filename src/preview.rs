//! # PNG Preview
//!
//! Renders a bitmap as a grayscale image so a conversion can be checked
//! without wasting paper. Ink is black (0), blank is white (255).

use std::io::Cursor;
use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};

use crate::bitmap::Bitmap;
use crate::error::Lx80Error;

const INK: Luma<u8> = Luma([0]);
const BLANK: Luma<u8> = Luma([255]);

/// Render a bitmap to an 8-bit grayscale image of the same size.
pub fn to_gray_image(bitmap: &Bitmap) -> GrayImage {
    let mut img = GrayImage::new(bitmap.width() as u32, bitmap.height() as u32);

    for (y, row) in bitmap.rows().enumerate() {
        for (x, &ink) in row.iter().enumerate() {
            img.put_pixel(x as u32, y as u32, if ink { INK } else { BLANK });
        }
    }

    img
}

/// Save a bitmap as a PNG file.
pub fn save_png(bitmap: &Bitmap, path: &Path) -> Result<(), Lx80Error> {
    check_not_empty(bitmap)?;
    to_gray_image(bitmap)
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| Lx80Error::Image(format!("Failed to save PNG: {}", e)))
}

/// Encode a bitmap as PNG bytes.
pub fn to_png_bytes(bitmap: &Bitmap) -> Result<Vec<u8>, Lx80Error> {
    check_not_empty(bitmap)?;
    let mut png_bytes = Vec::new();
    to_gray_image(bitmap)
        .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
        .map_err(|e| Lx80Error::Image(format!("Failed to encode PNG: {}", e)))?;
    Ok(png_bytes)
}

fn check_not_empty(bitmap: &Bitmap) -> Result<(), Lx80Error> {
    if bitmap.is_empty() {
        return Err(Lx80Error::EmptyInput(
            "nothing to preview in a 0x0 bitmap".to_string(),
        ));
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
