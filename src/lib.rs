//! # zenoled
//!
//! Converts 1-bit BMP images into the page-addressed byte layout used by
//! SSD1306-class monochrome OLED controllers, and renders the result as a
//! C array literal for Arduino-style display drivers.
//!
//! ## Layout
//!
//! BMP stores rows bottom-up, each row packed MSB-first and padded to a
//! 4-byte boundary. The display wants pages: horizontal bands of 8 rows,
//! one byte per column, bit 0 at the top of the band. The converted byte
//! array holds `width * ceil(height / 8)` bytes, all columns of page 0
//! first. Rows past the bottom of the image are zero bits.
//!
//! ## Non-Goals
//!
//! - Other image formats or bit depths (use zenbitmaps to get there)
//! - Dithering or thresholding of grayscale input
//! - Binary output files
//! - Controllers without page-based memory
//!
//! ## Usage
//!
//! ```no_run
//! use zenoled::{ConvertRequest, LiteralOptions, Unstoppable};
//!
//! let data: &[u8] = &[]; // your 1-bit BMP bytes
//!
//! let converted = ConvertRequest::new(data).convert(Unstoppable)?;
//! println!("{}", converted.diagnostic());
//! assert_eq!(converted.bitmap().as_bytes().len(), 128 * 64 / 8);
//!
//! let source = converted.literal(
//!     &LiteralOptions::default()
//!         .with_name("logo_bitmap")
//!         .with_define_prefix("LOGO"),
//! );
//! print!("{source}");
//! # Ok::<(), zenoled::OledError>(())
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod convert;
mod error;
mod header;
mod limits;
mod literal;
mod page;

// Re-exports
pub use convert::{Conversion, ConvertRequest, convert};
pub use enough::{Stop, StopReason, Unstoppable};
pub use error::OledError;
pub use header::{BmpHeader, COMPRESSION_RGB, FILE_HEADER_SIZE, parse_header};
pub use limits::Limits;
pub use literal::{CArray, LiteralOptions, render_literal};
pub use page::{PAGE_HEIGHT, PageBitmap, Permissiveness, RowOrder};
