//! C source literal emission for Arduino-style display drivers.

use alloc::string::{String, ToString};
use core::fmt;

use crate::page::PageBitmap;

/// Naming and layout of the emitted literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiteralOptions {
    /// Array identifier.
    pub name: String,
    /// Prefix of the `#define`s, e.g. `MEME` for `MEME_WIDTH` / `MEME_HEIGHT`.
    pub define_prefix: String,
    /// Hex values per line. Zero is treated as one.
    pub values_per_line: usize,
    /// Annotate the array with `PROGMEM` (flash placement on AVR).
    pub progmem: bool,
}

impl Default for LiteralOptions {
    fn default() -> Self {
        Self {
            name: "meme_bitmap".into(),
            define_prefix: "MEME".into(),
            values_per_line: 16,
            progmem: true,
        }
    }
}

impl LiteralOptions {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_define_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.define_prefix = prefix.into();
        self
    }

    pub fn with_values_per_line(mut self, n: usize) -> Self {
        self.values_per_line = n;
        self
    }

    pub fn with_progmem(mut self, progmem: bool) -> Self {
        self.progmem = progmem;
        self
    }
}

/// A [`PageBitmap`] formatted as a C array declaration plus width and
/// height `#define`s.
///
/// ```text
/// const unsigned char meme_bitmap[] PROGMEM = {
///   0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff
/// };
///
/// #define MEME_WIDTH 8
/// #define MEME_HEIGHT 8
/// ```
pub struct CArray<'a> {
    bitmap: &'a PageBitmap,
    options: &'a LiteralOptions,
}

impl<'a> CArray<'a> {
    pub fn new(bitmap: &'a PageBitmap, options: &'a LiteralOptions) -> Self {
        Self { bitmap, options }
    }
}

impl fmt::Display for CArray<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opts = self.options;
        let placement = if opts.progmem { " PROGMEM" } else { "" };
        writeln!(f, "const unsigned char {}[]{placement} = {{", opts.name)?;

        let mut lines = self
            .bitmap
            .as_bytes()
            .chunks(opts.values_per_line.max(1))
            .peekable();
        while let Some(line) = lines.next() {
            f.write_str("  ")?;
            for (i, byte) in line.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "0x{byte:02x}")?;
            }
            if lines.peek().is_some() {
                f.write_str(",")?;
            }
            f.write_str("\n")?;
        }
        writeln!(f, "}};")?;

        writeln!(f)?;
        writeln!(f, "#define {}_WIDTH {}", opts.define_prefix, self.bitmap.width())?;
        writeln!(f, "#define {}_HEIGHT {}", opts.define_prefix, self.bitmap.height())
    }
}

/// Render `bitmap` as C source text.
pub fn render_literal(bitmap: &PageBitmap, options: &LiteralOptions) -> String {
    CArray::new(bitmap, options).to_string()
}
