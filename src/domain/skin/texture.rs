use image::RgbaImage;

use super::layout::TextureFormat;
use crate::shared::result::{AppResult, SkinError};

/// A decoded skin whose dimensions match one of the two known layouts.
#[derive(Debug, Clone)]
pub struct SkinTexture {
    image: RgbaImage,
    format: TextureFormat,
}

impl SkinTexture {
    pub fn new(image: RgbaImage) -> AppResult<Self> {
        let (width, height) = image.dimensions();
        let format = TextureFormat::from_dimensions(width, height).ok_or_else(|| {
            SkinError::InvalidTexture(format!(
                "Dimensiones inválidas {width}x{height}. Se esperaba 64x64 o 64x32"
            ))
        })?;

        Ok(Self { image, format })
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn format(&self) -> TextureFormat {
        self.format
    }
}

#[cfg(test)]
mod tests {
    use image::RgbaImage;

    use super::SkinTexture;
    use crate::{domain::skin::layout::TextureFormat, shared::result::SkinError};

    #[test]
    fn accepts_both_skin_layouts() {
        let legacy = SkinTexture::new(RgbaImage::new(64, 32)).unwrap();
        let modern = SkinTexture::new(RgbaImage::new(64, 64)).unwrap();

        assert_eq!(legacy.format(), TextureFormat::Legacy);
        assert_eq!(modern.format(), TextureFormat::Modern);
    }

    #[test]
    fn rejects_hd_textures() {
        let result = SkinTexture::new(RgbaImage::new(128, 128));
        assert!(matches!(result, Err(SkinError::InvalidTexture(_))));
    }
}
