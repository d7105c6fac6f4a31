//! # Bitmap Front Ends
//!
//! Thin adapters that turn source material into a [`crate::Bitmap`]. Both feed
//! the same [`crate::Conversion`] pipeline.
//!
//! | Front end | Source | Ink rule |
//! |-----------|--------|----------|
//! | [`image`] | PNG, JPEG, GIF, ... | luma below threshold |
//! | [`text`] | ASCII art | any character except space and tab |

pub mod image;
pub mod text;
