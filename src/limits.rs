use crate::error::OledError;

/// Resource limits for a conversion.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for the page buffer.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Limits matching a physical panel, e.g. `Limits::for_panel(128, 64)`
    /// for a 128x64 SSD1306. The page buffer is capped at one full frame.
    pub fn for_panel(width: u32, height: u32) -> Self {
        let frame = u64::from(width) * u64::from(height).div_ceil(8);
        Self {
            max_width: Some(u64::from(width)),
            max_height: Some(u64::from(height)),
            max_pixels: None,
            max_memory_bytes: Some(frame),
        }
    }

    /// Check dimensions against limits. Returns Ok(()) or LimitExceeded error.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), OledError> {
        if let Some(max_w) = self.max_width {
            if u64::from(width) > max_w {
                return Err(OledError::LimitExceeded(alloc::format!(
                    "width {width} exceeds limit {max_w}"
                )));
            }
        }
        if let Some(max_h) = self.max_height {
            if u64::from(height) > max_h {
                return Err(OledError::LimitExceeded(alloc::format!(
                    "height {height} exceeds limit {max_h}"
                )));
            }
        }
        if let Some(max_px) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);
            if pixels > max_px {
                return Err(OledError::LimitExceeded(alloc::format!(
                    "pixel count {pixels} exceeds limit {max_px}"
                )));
            }
        }
        Ok(())
    }

    /// Check that the page buffer size is within memory limits.
    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), OledError> {
        if let Some(max_mem) = self.max_memory_bytes {
            if bytes as u64 > max_mem {
                return Err(OledError::LimitExceeded(alloc::format!(
                    "page buffer of {bytes} bytes exceeds memory limit {max_mem}"
                )));
            }
        }
        Ok(())
    }
}
