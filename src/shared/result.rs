use thiserror::Error;

pub type AppResult<T> = Result<T, SkinError>;

pub const EXIT_NOT_FOUND: u8 = 1;
pub const EXIT_BAD_PROFILE_DATA: u8 = 2;
pub const EXIT_TEXTURE_FAILED: u8 = 3;
pub const EXIT_RUNTIME_FAILURE: u8 = 4;
pub const EXIT_USAGE: u8 = 64;

#[derive(Debug, Error)]
pub enum SkinError {
    #[error("No se encontró {subject}")]
    NotFound { subject: String },

    #[error("Nombre de jugador inválido: {0}")]
    InvalidPlayerName(String),

    #[error("Datos de perfil inválidos: {0}")]
    BadProfileData(String),

    #[error("No se pudo descargar la textura: {0}")]
    TextureDownloadFailed(String),

    #[error("Textura inválida: {0}")]
    InvalidTexture(String),

    #[error("Error de red: {0}")]
    Network(String),

    #[error("Error de archivo: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuración inválida: {0}")]
    Config(String),
}

impl SkinError {
    #[must_use]
    pub fn player_not_found(name: &str) -> Self {
        Self::NotFound {
            subject: format!("el jugador {name}"),
        }
    }

    #[must_use]
    pub fn uuid_not_found(uuid: &str) -> Self {
        Self::NotFound {
            subject: format!("el jugador con uuid {uuid}"),
        }
    }

    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::NotFound { .. } | Self::InvalidPlayerName(_) => EXIT_NOT_FOUND,
            Self::BadProfileData(_) => EXIT_BAD_PROFILE_DATA,
            Self::TextureDownloadFailed(_) | Self::InvalidTexture(_) => EXIT_TEXTURE_FAILED,
            Self::Network(_) | Self::Io(_) | Self::Config(_) => EXIT_RUNTIME_FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SkinError;

    #[test]
    fn not_found_names_the_player() {
        let error = SkinError::player_not_found("Notch");
        assert_eq!(error.to_string(), "No se encontró el jugador Notch");
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn exit_codes_follow_failure_stage() {
        assert_eq!(SkinError::uuid_not_found("abc").exit_code(), 1);
        assert_eq!(SkinError::BadProfileData("x".into()).exit_code(), 2);
        assert_eq!(SkinError::TextureDownloadFailed("x".into()).exit_code(), 3);
        assert_eq!(SkinError::InvalidTexture("x".into()).exit_code(), 3);
        assert_eq!(SkinError::Network("x".into()).exit_code(), 4);
    }
}
