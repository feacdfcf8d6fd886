pub mod decoder;
pub mod image;
