//! Image decoding.
//!
//! Loads a source file into a plain RGBA pixel buffer. Quantization and
//! other pre-trace color manipulation are deliberately not provided here:
//! the pipeline traces the exact colors present in the source pixel-art
//! sprite.

use rgb::RGBA8;

use crate::error::PixvgError;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<RGBA8>,
}

pub fn load_image(path: &std::path::Path) -> Result<ImageData, PixvgError> {
    let img = image::open(path)?;
    let rgba = img.to_rgba8();

    let pixels: Vec<RGBA8> = rgba
        .pixels()
        .map(|p| RGBA8::new(p[0], p[1], p[2], p[3]))
        .collect();

    Ok(ImageData {
        width: rgba.width(),
        height: rgba.height(),
        pixels,
    })
}
