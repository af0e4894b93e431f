//! Texture images
//!
//! PNG and TGA files are decoded with the `image` crate and kept as tightly
//! packed RGBA8 rows, top row first.

use std::path::Path;

use image::DynamicImage;

use crate::assets::AssetError;

/// Decoded RGBA8 pixels
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Four bytes per pixel, row-major
    pub data: Vec<u8>,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl ImageData {
    /// Decode an image file; the format is picked from its contents
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let decoded = image::open(path)
            .map_err(|e| AssetError::LoadFailed(format!("{}: {}", path.display(), e)))?;
        let image = Self::from_decoded(decoded);
        log::info!("Texture {} is {}x{}", path.display(), image.width, image.height);
        Ok(image)
    }

    /// Decode an encoded image held in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let decoded = image::load_from_memory(bytes)
            .map_err(|e| AssetError::LoadFailed(format!("in-memory image: {}", e)))?;
        Ok(Self::from_decoded(decoded))
    }

    fn from_decoded(decoded: DynamicImage) -> Self {
        let rgba = decoded.into_rgba8();
        let (width, height) = rgba.dimensions();
        Self {
            data: rgba.into_raw(),
            width,
            height,
        }
    }

    /// Image where every pixel has the same color
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        Self {
            data: color.repeat((width * height) as usize),
            width,
            height,
        }
    }

    /// Pixel data length in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}
