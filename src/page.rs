//! Page re-encoding: bottom-up, MSB-first BMP rows into the column-major,
//! page-organized layout of SSD1306-class display RAM.
//!
//! Each output byte covers one column of one page (8 rows). Bit `b` of
//! byte `page * width + x` is the pixel at column `x`, row `page * 8 + b`.

use alloc::vec::Vec;

use enough::Stop;

use crate::error::OledError;
use crate::header::{BmpHeader, COMPRESSION_RGB};

/// Rows per display page.
pub const PAGE_HEIGHT: u32 = 8;

// ── Options ─────────────────────────────────────────────────────────

/// Controls how strictly the pixel data is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Permissiveness {
    /// Reject anything that is not an uncompressed 1-bit image, and fail
    /// with [`OledError::TruncatedData`] when a row is cut short.
    Strict,

    /// Default behavior. Bytes missing from truncated rows read as unset
    /// pixels; the bit depth and compression fields are not checked.
    #[default]
    Lenient,
}

/// How the stored row order is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowOrder {
    /// Always treat stored rows as bottom-up, whatever the height sign.
    #[default]
    AssumeBottomUp,

    /// Negative heights mean rows are already stored top-down.
    FromHeaderSign,
}

// ── Output ──────────────────────────────────────────────────────────

/// Display byte array in page-major, column-minor order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageBitmap {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl PageBitmap {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of 8-row pages, `ceil(height / 8)`.
    pub fn pages(&self) -> u32 {
        self.height.div_ceil(PAGE_HEIGHT)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// The `width` column bytes of one page, or `None` past the last page.
    pub fn page(&self, page: u32) -> Option<&[u8]> {
        if page >= self.pages() {
            return None;
        }
        let start = page as usize * self.width as usize;
        self.bytes.get(start..start + self.width as usize)
    }

    /// Whether the pixel at `(x, y)` (top-down) is set. Out of range is unset.
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = (y / PAGE_HEIGHT) as usize * self.width as usize + x as usize;
        self.bytes[index] & (1 << (y % PAGE_HEIGHT)) != 0
    }

    /// Unpack into a top-down grayscale image, 255 for set pixels.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<u8> {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut luma = Vec::with_capacity(w * h);
        for y in 0..self.height {
            for x in 0..self.width {
                luma.push(if self.pixel(x, y) { 255 } else { 0 });
            }
        }
        imgref::ImgVec::new(luma, w, h)
    }
}

// ── Re-encoding ─────────────────────────────────────────────────────

/// Reject variants strict mode does not accept. Lenient mode only warns.
pub(crate) fn check_variant(
    header: &BmpHeader,
    permissiveness: Permissiveness,
) -> Result<(), OledError> {
    let strict = permissiveness == Permissiveness::Strict;
    if header.bits_per_pixel != 1 {
        if strict {
            return Err(OledError::UnsupportedVariant(alloc::format!(
                "{} bits per pixel (only 1-bit images are supported)",
                header.bits_per_pixel
            )));
        }
        log::warn!(
            "{} bits per pixel; pixels are still read as packed 1-bit data",
            header.bits_per_pixel
        );
    }
    if header.compression != COMPRESSION_RGB {
        if strict {
            return Err(OledError::UnsupportedVariant(alloc::format!(
                "BMP compression {} (only uncompressed rows are supported)",
                header.compression
            )));
        }
        log::warn!(
            "BMP compression {} ignored; rows are read as uncompressed",
            header.compression
        );
    }
    Ok(())
}

/// Stored pixel rows of a BMP, addressed top-down.
struct StoredRows<'a> {
    data: &'a [u8],
    offset: usize,
    stride: usize,
    height: usize,
    bottom_up: bool,
}

impl<'a> StoredRows<'a> {
    /// Row in stored order. Rows running past the end of input are
    /// shortened; rows starting past it are empty.
    fn stored(&self, index: usize) -> &'a [u8] {
        let start = index
            .checked_mul(self.stride)
            .and_then(|o| o.checked_add(self.offset))
            .unwrap_or(usize::MAX)
            .min(self.data.len());
        let end = start.saturating_add(self.stride).min(self.data.len());
        &self.data[start..end]
    }

    /// Row `y` counted from the top of the image.
    fn top_down(&self, y: usize) -> &'a [u8] {
        if self.bottom_up {
            self.stored(self.height - 1 - y)
        } else {
            self.stored(y)
        }
    }

    /// First stored row shorter than `needed` bytes. Rows are contiguous,
    /// so only the tail of the image can be short.
    fn first_short(&self, needed: usize) -> Option<(usize, usize)> {
        let available = self.data.len().saturating_sub(self.offset);
        let full_rows = if self.stride == 0 {
            self.height
        } else {
            available / self.stride
        };
        (full_rows..self.height)
            .map(|i| (i, self.stored(i).len()))
            .find(|&(_, len)| len < needed)
    }
}

/// Re-encode the pixel rows of `data` into display pages.
pub(crate) fn encode_pages(
    data: &[u8],
    header: &BmpHeader,
    permissiveness: Permissiveness,
    row_order: RowOrder,
    stop: &dyn Stop,
) -> Result<PageBitmap, OledError> {
    let width = header.width();
    let height = header.height();
    let w = width as usize;
    let h = height as usize;
    let stride = header.row_stride()?;
    let pixel_bytes = w
        .checked_mul(usize::from(header.bits_per_pixel))
        .map(|bits| bits.div_ceil(8))
        .ok_or(OledError::DimensionsTooLarge { width, height })?;

    let rows = StoredRows {
        data,
        offset: header.pixel_data_offset as usize,
        stride,
        height: h,
        bottom_up: !(row_order == RowOrder::FromHeaderSign && header.is_top_down()),
    };

    if let Some((row, actual)) = rows.first_short(pixel_bytes) {
        if permissiveness == Permissiveness::Strict {
            return Err(OledError::TruncatedData {
                row,
                needed: pixel_bytes,
                actual,
            });
        }
        log::warn!(
            "pixel data truncated from stored row {row} of {h}; missing pixels read as unset"
        );
    }

    let pages = height.div_ceil(PAGE_HEIGHT) as usize;
    let out_len = w
        .checked_mul(pages)
        .ok_or(OledError::DimensionsTooLarge { width, height })?;
    log::debug!("re-encoding {w}x{h}: stride {stride}, {pages} pages, {out_len} bytes");

    // Header dimensions are untrusted; a short file can claim gigapixels.
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(out_len)
        .map_err(|_| OledError::DimensionsTooLarge { width, height })?;
    let mut band: [&[u8]; PAGE_HEIGHT as usize] = [&[]; PAGE_HEIGHT as usize];
    for page in 0..pages {
        if page % 16 == 0 {
            stop.check()?;
        }
        // Rows past the bottom of the image stay empty, so their bits are 0.
        for (bit, slot) in band.iter_mut().enumerate() {
            let y = page * PAGE_HEIGHT as usize + bit;
            *slot = if y < h { rows.top_down(y) } else { &[] };
        }
        for x in 0..w {
            let byte_index = x / 8;
            let mask = 0x80u8 >> (x % 8);
            let mut column = 0u8;
            for (bit, row) in band.iter().enumerate() {
                if row.get(byte_index).is_some_and(|b| b & mask != 0) {
                    column |= 1 << bit;
                }
            }
            bytes.push(column);
        }
    }

    Ok(PageBitmap {
        width,
        height,
        bytes,
    })
}
