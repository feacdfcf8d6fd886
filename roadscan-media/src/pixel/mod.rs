pub mod pixel_buffer;
pub mod pixel_formater;
