use crate::pixel::pixel_buffer::PixelBuffer;
use crate::CHANNELS;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RGB(pub u8, pub u8, pub u8);

impl RGB {
    pub fn channel_sum(&self) -> u32 {
        self.0 as u32 + self.1 as u32 + self.2 as u32
    }

    /// Mean of the three color channels, alpha is never part of a pixel here.
    pub fn brightness(&self) -> f64 {
        self.channel_sum() as f64 / 3.0
    }
}

#[derive(Debug, Clone)]
pub struct PixelIterator<'a> {
    pub(crate) current_x: usize,
    pub(crate) current_y: usize,

    pub(crate) buffer: &'a PixelBuffer<'a>,
}

impl Iterator for PixelIterator<'_> {
    type Item = (u32, u32, RGB);

    fn next(&mut self) -> Option<Self::Item> {
        let width = self.buffer.width() as usize;
        if width == 0 || self.current_y >= self.buffer.height() as usize {
            return None;
        }

        let offset = (self.current_y * width + self.current_x) * CHANNELS;
        let data = self.buffer.raw_data();
        if offset + 2 >= data.len() {
            return None;
        }

        let item = (
            self.current_x as u32,
            self.current_y as u32,
            RGB(data[offset], data[offset + 1], data[offset + 2]),
        );

        self.current_x += 1;
        if self.current_x >= width {
            self.current_x = 0;
            self.current_y += 1;
        }

        Some(item)
    }
}
