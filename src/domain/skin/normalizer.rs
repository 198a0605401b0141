use image::RgbaImage;

use super::{
    compose::{crop, paste},
    layout::{
        PasteMode, TextureFormat, FRONT_SRC_RECT, OVERLAY_BAND_DEST, OVERLAY_BAND_SRC_RECT,
    },
    texture::SkinTexture,
};

/// Reduces a texture to the single-layer 64x32 skin.
///
/// Legacy textures already are that layout and come back untouched, with or
/// without `overlays`. For 64x64 textures the top half is kept and, when
/// `overlays` is set, rows 32..48 are masked onto rows 16..32.
pub fn normalize_skin(texture: &SkinTexture, overlays: bool) -> RgbaImage {
    match texture.format() {
        TextureFormat::Legacy => texture.image().clone(),
        TextureFormat::Modern => {
            let mut front = crop(texture.image(), FRONT_SRC_RECT);
            if overlays {
                let band = crop(texture.image(), OVERLAY_BAND_SRC_RECT);
                paste(&mut front, &band, OVERLAY_BAND_DEST, PasteMode::AlphaMask);
            }
            front
        }
    }
}
