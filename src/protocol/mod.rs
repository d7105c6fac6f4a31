//! # ESC/P Protocol Implementation
//!
//! This module provides the low-level pieces of the Epson ESC/P bit-image
//! protocol used by 9-pin dot-matrix printers such as the LX-80.
//!
//! ## Module Structure
//!
//! - [`commands`]: Control bytes and the [`commands::CommandSet`] table
//! - [`graphics`]: Resolution modes, strips, and column packing
//! - [`decode`]: Reading a printer stream back into a bitmap
//!
//! ## Usage Example
//!
//! ```
//! use lx80::protocol::commands::CommandSet;
//! use lx80::protocol::graphics::ResolutionMode;
//!
//! let cmds = CommandSet::ESC_P;
//!
//! // One 8-dot strip of two columns, top pin only
//! let mut data = Vec::new();
//! data.extend(cmds.line_spacing(8));
//! data.extend(cmds.bit_image_header(ResolutionMode::Mode60, 2));
//! data.extend([0x80, 0x80]);
//! data.extend(cmds.line_end());
//! data.extend(cmds.reset());
//!
//! assert_eq!(data.len(), 13);
//! ```

pub mod commands;
pub mod decode;
pub mod graphics;
