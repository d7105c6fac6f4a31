//! # Bitmap Preprocessing
//!
//! Pure transforms applied between bitmap acquisition and encoding.
//!
//! | Transform | Result size | Description |
//! |-----------|-------------|-------------|
//! | [`scale`] | `w*k x h*k` | Nearest-neighbour pixel replication |
//! | [`add_border`] | `(w+2) x (h+2)` | One-pixel ink ring |
//!
//! ## Ordering
//!
//! The transforms do not commute. Bordering first and then scaling gives a
//! border `k` pixels thick; scaling first gives a one-pixel border around the
//! enlarged image. [`crate::pipeline::Conversion`] borders first.
//!
//! ```text
//! add_border then scale(2)     scale(2) then add_border
//!   ██████████                   ██████
//!   ██████████                   █░░░░█
//!   ██░░░░░░██                   █░░░░█
//!   ██░░░░░░██                   ██████
//! ```

use crate::bitmap::Bitmap;
use crate::error::BitmapError;

/// Enlarge a bitmap by an integer factor.
///
/// Each source pixel becomes a `factor x factor` block of the same value.
/// `factor == 1` returns an identical copy. No interpolation is performed.
///
/// ## Errors
///
/// [`BitmapError::InvalidScale`] if `factor` is 0.
///
/// ## Example
///
/// ```
/// use lx80::{Bitmap, preprocess};
///
/// let dot = Bitmap::filled(1, 1, true);
/// let block = preprocess::scale(&dot, 3).unwrap();
///
/// assert_eq!((block.width(), block.height()), (3, 3));
/// assert_eq!(block.ink_count(), 9);
/// ```
pub fn scale(bitmap: &Bitmap, factor: u32) -> Result<Bitmap, BitmapError> {
    if factor < 1 {
        return Err(BitmapError::InvalidScale(factor));
    }
    if factor == 1 {
        return Ok(bitmap.clone());
    }

    let k = factor as usize;
    Ok(Bitmap::from_fn(
        bitmap.width() * k,
        bitmap.height() * k,
        |x, y| bitmap.get(x / k, y / k),
    ))
}

/// Surround a bitmap with a one-pixel ink border.
///
/// Source pixels land at offset (1, 1). The border of the empty bitmap is a
/// 2x2 block of ink.
///
/// ## Example
///
/// ```
/// use lx80::{Bitmap, preprocess};
///
/// let blank = Bitmap::filled(2, 1, false);
/// let framed = preprocess::add_border(&blank);
///
/// assert_eq!((framed.width(), framed.height()), (4, 3));
/// assert!(framed.pixel_at(0, 0).unwrap());
/// assert!(!framed.pixel_at(1, 1).unwrap());
/// ```
pub fn add_border(bitmap: &Bitmap) -> Bitmap {
    let width = bitmap.width() + 2;
    let height = bitmap.height() + 2;

    Bitmap::from_fn(width, height, |x, y| {
        if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
            true
        } else {
            bitmap.get(x - 1, y - 1)
        }
    })
}

/// The border [`add_border`] would draw around a blank `width x height` area.
///
/// Useful when the area has no pixels of its own, such as ASCII art made of
/// empty lines: `frame(0, n)` is `2 x (n + 2)` ink.
pub fn frame(width: usize, height: usize) -> Bitmap {
    let outer_width = width + 2;
    let outer_height = height + 2;

    Bitmap::from_fn(outer_width, outer_height, |x, y| {
        x == 0 || y == 0 || x == outer_width - 1 || y == outer_height - 1
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn diagonal() -> Bitmap {
        Bitmap::from_rows(&[[true, false, false], [false, true, false]]).unwrap()
    }

    #[test]
    fn test_scale_identity() {
        let bitmap = diagonal();
        assert_eq!(scale(&bitmap, 1).unwrap(), bitmap);
    }

    #[test]
    fn test_scale_zero_rejected() {
        assert_eq!(scale(&diagonal(), 0), Err(BitmapError::InvalidScale(0)));
    }

    #[test]
    fn test_scale_single_pixel() {
        for k in 1..=5u32 {
            let scaled = scale(&Bitmap::filled(1, 1, true), k).unwrap();
            let k = k as usize;
            assert_eq!(scaled.width(), k);
            assert_eq!(scaled.height(), k);
            assert_eq!(scaled.ink_count(), k * k);
        }
    }

    #[test]
    fn test_scale_replicates_blocks() {
        let scaled = scale(&diagonal(), 2).unwrap();
        assert_eq!(scaled.width(), 6);
        assert_eq!(scaled.height(), 4);

        let expected = Bitmap::from_rows(&[
            [true, true, false, false, false, false],
            [true, true, false, false, false, false],
            [false, false, true, true, false, false],
            [false, false, true, true, false, false],
        ])
        .unwrap();
        assert_eq!(scaled, expected);
    }

    #[test]
    fn test_scale_empty() {
        assert_eq!(scale(&Bitmap::empty(), 4).unwrap(), Bitmap::empty());
    }

    #[test]
    fn test_border_ring_and_interior() {
        let source = diagonal();
        let framed = add_border(&source);
        assert_eq!(framed.width(), source.width() + 2);
        assert_eq!(framed.height(), source.height() + 2);

        for y in 0..framed.height() {
            for x in 0..framed.width() {
                let on_ring =
                    x == 0 || y == 0 || x == framed.width() - 1 || y == framed.height() - 1;
                let pixel = framed.pixel_at(x, y).unwrap();
                if on_ring {
                    assert!(pixel, "ring pixel ({},{}) should be ink", x, y);
                } else {
                    assert_eq!(pixel, source.pixel_at(x - 1, y - 1).unwrap());
                }
            }
        }
    }

    #[test]
    fn test_border_of_empty() {
        let framed = add_border(&Bitmap::empty());
        assert_eq!(framed, Bitmap::filled(2, 2, true));
    }

    #[test]
    fn test_frame_matches_border_of_blank() {
        assert_eq!(frame(3, 2), add_border(&Bitmap::filled(3, 2, false)));
        assert_eq!(frame(0, 0), add_border(&Bitmap::empty()));
    }

    #[test]
    fn test_frame_of_blank_lines() {
        let framed = frame(0, 2);
        assert_eq!(framed, Bitmap::filled(2, 4, true));
    }

    #[test]
    fn test_border_then_scale_differs_from_scale_then_border() {
        let source = Bitmap::filled(1, 1, false);
        let border_first = scale(&add_border(&source), 2).unwrap();
        let scale_first = add_border(&scale(&source, 2).unwrap());

        assert_eq!((border_first.width(), border_first.height()), (6, 6));
        assert_eq!((scale_first.width(), scale_first.height()), (4, 4));
        assert_eq!(border_first.ink_count(), 32);
        assert_eq!(scale_first.ink_count(), 12);
    }
}
