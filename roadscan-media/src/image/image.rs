use crate::{PixelBuffer, CHANNELS};
use anyhow::{bail, Result};

/// A decoded photo, always stored as tightly packed RGBA8.
#[derive(Debug, Clone)]
pub struct Image {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) data: Vec<u8>,
}

impl Image {
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * CHANNELS;
        if width == 0 || height == 0 {
            bail!("Image size must be non-zero, got {}x{}", width, height);
        }
        if data.len() != expected {
            bail!(
                "Raw data length mismatch: {} vs {} for a {}x{} RGBA image",
                data.len(),
                expected,
                width,
                height
            );
        }

        Ok(Image {
            width,
            height,
            data,
        })
    }

    pub fn raw_data(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel_buffer(&self) -> PixelBuffer<'_> {
        PixelBuffer::new(self.width, self.height, &self.data)
    }
}
