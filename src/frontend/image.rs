//! # Image Front End
//!
//! Decodes a picture with the `image` crate, reduces it to the printer's
//! width, and thresholds it to black and white.
//!
//! ## Pipeline
//!
//! ```text
//! file ─► decode ─► resize (only if wider than max_width) ─► luma ─► threshold
//! ```
//!
//! Resizing keeps the aspect ratio and uses Lanczos3. Images narrower than
//! `max_width` are never enlarged.
//!
//! ## Luma
//!
//! Gray levels use the ITU-R 601 weights `L = (299 R + 587 G + 114 B) / 1000`
//! in 16-bit fixed point with rounding, the common conversion of image
//! editors. The `image` crate's own `to_luma8` uses Rec. 709 weights, which
//! make greens much lighter, so it is not used here.
//!
//! ## Threshold
//!
//! A pixel is printed when its luma is strictly below the threshold:
//!
//! | Threshold | Effect |
//! |-----------|--------|
//! | 0 | nothing prints |
//! | 128 | mid-gray and darker prints |
//! | 255 | everything except pure white prints |

use std::path::Path;

use image::{DynamicImage, GrayImage, Luma, Rgb, imageops::FilterType};
use tracing::{debug, info};

use crate::bitmap::Bitmap;
use crate::error::Lx80Error;
use crate::printer::PrinterConfig;

/// Default black/white cut-off.
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Options for converting a picture to a bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageOptions {
    /// Images wider than this are scaled down to it
    pub max_width: u32,
    /// Luma values below this become ink
    pub threshold: u8,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            max_width: PrinterConfig::LX80.default_image_width,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Open an image file and convert it to a bitmap.
pub fn load(path: &Path, options: ImageOptions) -> Result<Bitmap, Lx80Error> {
    let img = image::open(path)
        .map_err(|e| Lx80Error::Image(format!("Failed to open {}: {}", path.display(), e)))?;
    debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );
    Ok(from_dynamic_image(&img, options))
}

/// Convert a decoded image to a bitmap.
///
/// ## Example
///
/// ```
/// use image::{DynamicImage, GrayImage, Luma};
/// use lx80::frontend::image::{ImageOptions, from_dynamic_image};
///
/// let gray = GrayImage::from_fn(4, 2, |x, _| Luma([if x < 2 { 0 } else { 255 }]));
/// let bitmap = from_dynamic_image(&DynamicImage::ImageLuma8(gray), ImageOptions::default());
///
/// assert_eq!(bitmap.ink_count(), 4);
/// ```
pub fn from_dynamic_image(img: &DynamicImage, options: ImageOptions) -> Bitmap {
    let max_width = options.max_width.max(1);

    let gray = if img.width() > max_width {
        let ratio = max_width as f64 / img.width() as f64;
        let height = ((img.height() as f64 * ratio) as u32).max(1);
        info!("Resized to {}x{} pixels", max_width, height);
        to_gray(&img.resize_exact(max_width, height, FilterType::Lanczos3))
    } else {
        to_gray(img)
    };

    let bitmap = threshold(&gray, options.threshold);
    info!("Converted to B&W (threshold={})", options.threshold);
    bitmap
}

/// Convert to 8-bit gray with ITU-R 601 weights. Alpha is dropped.
pub fn to_gray(img: &DynamicImage) -> GrayImage {
    let rgb = img.to_rgb8();
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let Rgb([r, g, b]) = *rgb.get_pixel(x, y);
        Luma([luma_601(r, g, b)])
    })
}

/// `(299 R + 587 G + 114 B) / 1000`, rounded, in 16-bit fixed point.
#[inline]
pub fn luma_601(r: u8, g: u8, b: u8) -> u8 {
    let sum = r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000;
    (sum >> 16) as u8
}

/// Threshold an 8-bit grayscale image: luma `< level` is ink.
pub fn threshold(gray: &GrayImage, level: u8) -> Bitmap {
    Bitmap::from_fn(gray.width() as usize, gray.height() as usize, |x, y| {
        gray.get_pixel(x as u32, y as u32)[0] < level
    })
}

// ============================================================================
// TESTS
// ============================================================================
