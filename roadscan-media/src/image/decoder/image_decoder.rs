use crate::Image;
use anyhow::{Context, Result};
use image::ImageReader;
use log::debug;
use std::io::Cursor;

impl Image {
    /// Decodes an encoded photo (PNG, JPEG, WebP, BMP) into RGBA8.
    /// The container format is sniffed from the bytes, not from any file name.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .context("Failed to read image header")?;
        let format = reader.format();

        let decoded = reader.decode().context("Failed to decode image")?;
        let rgba = decoded.into_rgba8();
        let (width, height) = rgba.dimensions();
        debug!("Decoded {:?} image of {}x{}", format, width, height);

        Image::from_raw(width, height, rgba.into_raw())
    }
}
