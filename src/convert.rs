use alloc::string::String;

use enough::Stop;

use crate::error::OledError;
use crate::header::{BmpHeader, parse_header};
use crate::limits::Limits;
use crate::literal::{LiteralOptions, render_literal};
use crate::page::{PAGE_HEIGHT, PageBitmap, Permissiveness, RowOrder, check_variant, encode_pages};

/// A 1-bit BMP converted to display pages.
#[derive(Clone, Debug)]
pub struct Conversion {
    pub header: BmpHeader,
    bitmap: PageBitmap,
}

impl Conversion {
    pub fn bitmap(&self) -> &PageBitmap {
        &self.bitmap
    }

    pub fn into_bitmap(self) -> PageBitmap {
        self.bitmap
    }

    /// `Image: {width}x{height}, {bpp} bits per pixel`
    pub fn diagnostic(&self) -> String {
        alloc::format!(
            "Image: {}x{}, {} bits per pixel",
            self.header.width(),
            self.header.height(),
            self.header.bits_per_pixel
        )
    }

    /// The C array and `#define`s for this image.
    pub fn literal(&self, options: &LiteralOptions) -> String {
        render_literal(&self.bitmap, options)
    }
}

/// Builder for a BMP to display-page conversion.
///
/// ```no_run
/// use zenoled::{ConvertRequest, LiteralOptions, Permissiveness, Unstoppable};
///
/// let data: &[u8] = &[]; // your 1-bit BMP bytes
/// let converted = ConvertRequest::new(data)
///     .with_permissiveness(Permissiveness::Strict)
///     .convert(Unstoppable)?;
/// println!("{}", converted.literal(&LiteralOptions::default()));
/// # Ok::<(), zenoled::OledError>(())
/// ```
#[derive(Clone, Debug)]
pub struct ConvertRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
    permissiveness: Permissiveness,
    row_order: RowOrder,
}

impl<'a> ConvertRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            permissiveness: Permissiveness::default(),
            row_order: RowOrder::default(),
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_permissiveness(mut self, permissiveness: Permissiveness) -> Self {
        self.permissiveness = permissiveness;
        self
    }

    pub fn with_row_order(mut self, row_order: RowOrder) -> Self {
        self.row_order = row_order;
        self
    }

    /// Parse the header and re-encode the pixel rows.
    pub fn convert(self, stop: impl Stop) -> Result<Conversion, OledError> {
        let header = parse_header(self.data)?;
        check_variant(&header, self.permissiveness)?;
        if let Some(limits) = self.limits {
            let (width, height) = (header.width(), header.height());
            limits.check(width, height)?;
            let page_bytes = (width as usize)
                .checked_mul(height.div_ceil(PAGE_HEIGHT) as usize)
                .ok_or(OledError::DimensionsTooLarge { width, height })?;
            limits.check_memory(page_bytes)?;
        }
        stop.check()?;
        let bitmap = encode_pages(
            self.data,
            &header,
            self.permissiveness,
            self.row_order,
            &stop,
        )?;
        Ok(Conversion { header, bitmap })
    }
}

/// Convert with default options (lenient, bottom-up, no limits).
pub fn convert(data: &[u8], stop: impl Stop) -> Result<Conversion, OledError> {
    ConvertRequest::new(data).convert(stop)
}
