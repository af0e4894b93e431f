//! Texture data bound to a shader sampler

use std::path::Path;
use std::sync::Arc;

use crate::assets::{AssetError, ImageData};

/// Image data plus the name of the sampler uniform it binds to
///
/// Pixel data is shared, so cloning a texture (for example when many
/// floor tiles reuse one mesh) does not copy the image.
#[derive(Debug, Clone)]
pub struct Texture {
    /// Sampler uniform name in the fragment shader (e.g. `baseTexture`)
    pub sampler_name: String,
    /// Decoded RGBA8 image
    pub image: Arc<ImageData>,
}

impl Texture {
    /// Wrap already-decoded image data
    pub fn from_image(image: ImageData, sampler_name: impl Into<String>) -> Self {
        Self {
            sampler_name: sampler_name.into(),
            image: Arc::new(image),
        }
    }

    /// Load an image file and bind it to the given sampler name
    pub fn load<P: AsRef<Path>>(path: P, sampler_name: impl Into<String>) -> Result<Self, AssetError> {
        let image = ImageData::from_file(path)?;
        Ok(Self::from_image(image, sampler_name))
    }

    /// Single-color texture, used when an image file is unavailable
    pub fn solid_color(width: u32, height: u32, color: [u8; 4], sampler_name: impl Into<String>) -> Self {
        Self::from_image(ImageData::solid_color(width, height, color), sampler_name)
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.image.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.image.height
    }
}
