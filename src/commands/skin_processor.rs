use image::{codecs::png::PngEncoder, ColorType, ImageEncoder, RgbaImage};

use crate::shared::result::{AppResult, SkinError};

pub fn encode_png(image: &RgbaImage) -> AppResult<Vec<u8>> {
    let (width, height) = image.dimensions();

    let mut output = Vec::<u8>::new();
    let encoder = PngEncoder::new(&mut output);
    encoder
        .write_image(image, width, height, ColorType::Rgba8.into())
        .map_err(|err| SkinError::InvalidTexture(format!("No se pudo codificar PNG: {err}")))?;

    Ok(output)
}
