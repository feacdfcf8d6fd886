use roadscan_media::PixelBuffer;
use thiserror::Error;

pub type DetectResult<T> = Result<T, DetectError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectError {
    /// The buffer shape does not describe an RGBA image of the given size.
    #[error("invalid pixel buffer: {width}x{height} RGBA needs {expected} bytes, got {actual}")]
    InvalidInput {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

impl DetectError {
    pub fn invalid_input(buffer: &PixelBuffer<'_>) -> Self {
        DetectError::InvalidInput {
            width: buffer.width(),
            height: buffer.height(),
            expected: buffer.expected_len().unwrap_or(usize::MAX),
            actual: buffer.raw_data().len(),
        }
    }
}
