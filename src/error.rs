use alloc::string::String;
use enough::StopReason;

/// Errors from BMP parsing and page re-encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum OledError {
    /// The first two bytes are not the `BM` signature.
    #[error("unrecognized format magic bytes (expected \"BM\")")]
    UnrecognizedFormat,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("truncated pixel data: row {row} needs {needed} bytes, got {actual}")]
    TruncatedData {
        row: usize,
        needed: usize,
        actual: usize,
    },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for OledError {
    fn from(r: StopReason) -> Self {
        OledError::Cancelled(r)
    }
}
