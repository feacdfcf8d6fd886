pub mod image;
pub mod pixel;

pub use crate::image::image::Image;
pub use crate::pixel::pixel_buffer::PixelBuffer;
pub use crate::pixel::pixel_formater::RGB;

/// Bytes per pixel of every buffer handled by this crate (R, G, B, A).
pub const CHANNELS: usize = 4;
