use crate::pixel::pixel_formater::{PixelIterator, RGB};
use crate::CHANNELS;

/// Borrowed view over a decoded RGBA photo, row-major.
///
/// Construction never fails; the shape is checked by whoever consumes the
/// buffer, see [`PixelBuffer::is_well_formed`].
#[derive(Debug, Copy, Clone)]
pub struct PixelBuffer<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> PixelBuffer<'a> {
    pub fn new(width: u32, height: u32, data: &'a [u8]) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn raw_data(&self) -> &'a [u8] {
        self.data
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Byte length a buffer of this width and height has to carry.
    pub fn expected_len(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(CHANNELS)
    }

    pub fn is_well_formed(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.expected_len() == Some(self.data.len())
    }

    /// Color of the pixel at a flat (row-major) pixel index.
    ///
    /// Panics when the index is outside a well-formed buffer.
    #[inline]
    pub fn pixel(&self, index: usize) -> RGB {
        let offset = index * CHANNELS;
        RGB(
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
        )
    }

    #[inline]
    pub fn pixel_at(&self, x: u32, y: u32) -> RGB {
        self.pixel(y as usize * self.width as usize + x as usize)
    }

    pub fn pixels(&self) -> PixelIterator<'_> {
        PixelIterator {
            current_x: 0,
            current_y: 0,
            buffer: self,
        }
    }
}
