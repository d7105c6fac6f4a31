//! # lx80 - ESC/P Bit Image Converter
//!
//! lx80 turns pictures and ASCII art into print files for Epson 9-pin
//! dot-matrix printers such as the LX-80. It provides:
//!
//! - **Bitmap model**: a rectangular grid of ink/blank pixels
//! - **Preprocessing**: integer scaling and borders
//! - **Encoder**: byte-exact `ESC K` / `ESC L` bit-image streams
//! - **Front ends**: image thresholding and ASCII-art parsing
//! - **Preview**: PNG rendering of bitmaps and existing print files
//!
//! ## Quick Start
//!
//! ```
//! use lx80::{Conversion, EncodingConfig, ResolutionMode, frontend::text};
//!
//! let art = text::parse("*****\n*   *\n*****\n")?;
//!
//! let conversion = Conversion::new(EncodingConfig::new(ResolutionMode::Mode120))
//!     .border(true)
//!     .scale(2);
//! let data = conversion.run(&art)?;
//!
//! // 5x3 art, bordered to 7x5, doubled to 14x10: two strips of 14 columns
//! assert_eq!(data.len(), 5 + 2 * (6 + 14));
//!
//! // Write `data` to a file and copy it to the printer port...
//! # Ok::<(), lx80::Lx80Error>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`bitmap`] | Pixel grid |
//! | [`preprocess`] | Scale and border transforms |
//! | [`encoder`] | Bitmap to ESC/P stream |
//! | [`protocol`] | Command bytes, packing, stream decoding |
//! | [`pipeline`] | Shared border, scale, encode path |
//! | [`frontend`] | Image and ASCII-art adapters |
//! | [`preview`] | PNG output |
//! | [`printer`] | Printer limits |
//! | [`error`] | Error types |

pub mod bitmap;
pub mod encoder;
pub mod error;
pub mod frontend;
pub mod pipeline;
pub mod preprocess;
pub mod preview;
pub mod printer;
pub mod protocol;

// Re-exports for convenience
pub use bitmap::Bitmap;
pub use encoder::{EncodingConfig, encode};
pub use error::{BitmapError, DecodeError, Lx80Error};
pub use pipeline::Conversion;
pub use printer::PrinterConfig;
pub use protocol::graphics::ResolutionMode;
