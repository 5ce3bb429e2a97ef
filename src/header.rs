//! BMP file and information header parsing.
//!
//! Only the fields the page re-encoder needs are extracted. The 14-byte
//! file header carries the signature and the pixel data offset; the
//! information header that follows carries its own size, then the
//! dimensions and bit depth.

use crate::error::OledError;

/// Size of the fixed BMP file header.
pub const FILE_HEADER_SIZE: usize = 14;

/// OS/2 `BITMAPCOREHEADER` size (16-bit dimensions).
const CORE_HEADER_SIZE: u32 = 12;

/// `BI_RGB`: uncompressed rows.
pub const COMPRESSION_RGB: u32 = 0;

/// Parsed BMP header fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpHeader {
    pub width: i32,
    /// Signed height. Negative means rows are stored top-down.
    pub height: i32,
    pub bits_per_pixel: u16,
    pub pixel_data_offset: u32,
    pub info_header_size: u32,
    /// Compression field, `COMPRESSION_RGB` when the header has none.
    pub compression: u32,
    /// File size as declared by the file header (not validated).
    pub file_size: u32,
}

impl BmpHeader {
    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width.unsigned_abs()
    }

    /// Absolute height in pixels, regardless of storage order.
    pub fn height(&self) -> u32 {
        self.height.unsigned_abs()
    }

    pub fn is_top_down(&self) -> bool {
        self.height < 0
    }

    /// Padded byte length of one stored row:
    /// `((width * bpp + 31) / 32) * 4`.
    pub fn row_stride(&self) -> Result<usize, OledError> {
        (self.width() as usize)
            .checked_mul(usize::from(self.bits_per_pixel))
            .and_then(|bits| bits.checked_add(31))
            .map(|bits| bits / 32 * 4)
            .ok_or(OledError::DimensionsTooLarge {
                width: self.width(),
                height: self.height(),
            })
    }
}

// ── Cursor for reading from &[u8] ───────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn set_position(&mut self, pos: usize) -> Result<(), OledError> {
        if pos > self.data.len() {
            return Err(OledError::UnexpectedEof);
        }
        self.pos = pos;
        Ok(())
    }

    fn skip(&mut self, n: usize) -> Result<(), OledError> {
        let new_pos = self.pos.checked_add(n).ok_or(OledError::UnexpectedEof)?;
        self.set_position(new_pos)
    }

    fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], OledError> {
        let bytes = self
            .data
            .get(self.pos..self.pos + N)
            .ok_or(OledError::UnexpectedEof)?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(bytes);
        self.pos += N;
        Ok(buf)
    }

    fn get_u16_le(&mut self) -> Result<u16, OledError> {
        self.read_fixed_bytes().map(u16::from_le_bytes)
    }

    fn get_u32_le(&mut self) -> Result<u32, OledError> {
        self.read_fixed_bytes().map(u32::from_le_bytes)
    }

    fn get_i32_le(&mut self) -> Result<i32, OledError> {
        self.read_fixed_bytes().map(i32::from_le_bytes)
    }
}

/// Parse the BMP file header and information header.
///
/// Fails with [`OledError::UnrecognizedFormat`] when the input does not
/// start with `BM`. Nothing past the information header's bit depth (and
/// compression, when present) is read.
pub fn parse_header(data: &[u8]) -> Result<BmpHeader, OledError> {
    if !data.starts_with(b"BM") {
        return Err(OledError::UnrecognizedFormat);
    }
    let mut bytes = Cursor::new(data);
    bytes.skip(2)?;
    let file_size = bytes.get_u32_le()?;
    // Reserved (4 bytes)
    bytes.skip(4)?;
    let pixel_data_offset = bytes.get_u32_le()?;

    let info_header_size = bytes.get_u32_le()?;
    let (width, height, _planes, bits_per_pixel, compression);
    match info_header_size {
        CORE_HEADER_SIZE => {
            width = i32::from(bytes.get_u16_le()?);
            height = i32::from(bytes.get_u16_le()?);
            _planes = bytes.get_u16_le()?;
            bits_per_pixel = bytes.get_u16_le()?;
            compression = COMPRESSION_RGB;
        }
        16.. => {
            width = bytes.get_i32_le()?;
            height = bytes.get_i32_le()?;
            _planes = bytes.get_u16_le()?;
            bits_per_pixel = bytes.get_u16_le()?;
            compression = if info_header_size >= 20 {
                bytes.get_u32_le()?
            } else {
                COMPRESSION_RGB
            };
        }
        _ => {
            return Err(OledError::InvalidHeader(alloc::format!(
                "unknown BMP info header size: {info_header_size}"
            )));
        }
    }

    if width < 0 {
        return Err(OledError::InvalidHeader(alloc::format!(
            "BMP width is negative ({width})"
        )));
    }

    let header = BmpHeader {
        width,
        height,
        bits_per_pixel,
        pixel_data_offset,
        info_header_size,
        compression,
        file_size,
    };
    log::debug!(
        "BMP header: {}x{} ({}), {} bpp, compression {}, pixels at {}, info header {} bytes",
        header.width(),
        header.height(),
        if header.is_top_down() { "top-down" } else { "bottom-up" },
        bits_per_pixel,
        compression,
        pixel_data_offset,
        info_header_size,
    );
    Ok(header)
}
