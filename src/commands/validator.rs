use image::ImageFormat;

use crate::{
    domain::skin::texture::SkinTexture,
    shared::result::{AppResult, SkinError},
};

pub const MAX_PLAYER_NAME_LEN: usize = 16;

/// Player names are 1-16 characters of `[A-Za-z0-9_]`.
pub fn validate_player_name(value: &str) -> AppResult<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SkinError::InvalidPlayerName("el nombre está vacío".to_string()));
    }
    if trimmed.len() > MAX_PLAYER_NAME_LEN {
        return Err(SkinError::InvalidPlayerName(format!(
            "{trimmed} supera los {MAX_PLAYER_NAME_LEN} caracteres"
        )));
    }
    if !trimmed
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
    {
        return Err(SkinError::InvalidPlayerName(format!(
            "{trimmed} contiene caracteres no permitidos"
        )));
    }

    Ok(trimmed)
}

pub fn decode_skin_png(bytes: &[u8]) -> AppResult<SkinTexture> {
    if bytes.is_empty() {
        return Err(SkinError::InvalidTexture("La textura está vacía".to_string()));
    }

    let format = image::guess_format(bytes)
        .map_err(|err| SkinError::InvalidTexture(format!("No se pudo detectar formato: {err}")))?;
    if format != ImageFormat::Png {
        return Err(SkinError::InvalidTexture("La textura debe ser PNG".into()));
    }

    let image = image::load_from_memory_with_format(bytes, ImageFormat::Png)
        .map_err(|err| SkinError::InvalidTexture(format!("No se pudo leer PNG: {err}")))?;

    SkinTexture::new(image.to_rgba8())
}

#[cfg(test)]
mod tests {
    use image::RgbaImage;

    use super::{decode_skin_png, validate_player_name};
    use crate::{
        commands::skin_processor::encode_png, domain::skin::layout::TextureFormat,
        shared::result::SkinError,
    };

    #[test]
    fn player_name_rules() {
        assert_eq!(validate_player_name(" Alex ").unwrap(), "Alex");
        assert_eq!(validate_player_name("jeb_").unwrap(), "jeb_");
        assert!(matches!(
            validate_player_name(""),
            Err(SkinError::InvalidPlayerName(_))
        ));
        assert!(validate_player_name("../etc/passwd").is_err());
        assert!(validate_player_name("a_name_that_is_too_long").is_err());
    }

    #[test]
    fn decodes_png_skin() {
        let bytes = encode_png(&RgbaImage::new(64, 32)).unwrap();
        let texture = decode_skin_png(&bytes).unwrap();
        assert_eq!(texture.format(), TextureFormat::Legacy);
    }

    #[test]
    fn rejects_non_png_and_wrong_size() {
        assert!(matches!(
            decode_skin_png(b"GIF89a......"),
            Err(SkinError::InvalidTexture(_))
        ));
        assert!(matches!(decode_skin_png(&[]), Err(SkinError::InvalidTexture(_))));

        let bytes = encode_png(&RgbaImage::new(32, 32)).unwrap();
        assert!(matches!(
            decode_skin_png(&bytes),
            Err(SkinError::InvalidTexture(_))
        ));
    }
}
