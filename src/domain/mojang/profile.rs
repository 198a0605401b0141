use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::result::{AppResult, SkinError};

/// Body of the name -> uuid lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameLookupResponse {
    pub id: Uuid,
    pub name: String,
}

/// Body of the session profile lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionProfile {
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub properties: Vec<ProfileProperty>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileProperty {
    pub name: Option<String>,
    pub value: Option<String>,
    pub signature: Option<String>,
}

/// Decoded `textures` property.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TexturesPayload {
    pub profile_name: Option<String>,
    pub textures: Option<TextureSet>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureSet {
    #[serde(rename = "SKIN")]
    pub skin: Option<SkinTextureEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkinTextureEntry {
    pub url: Option<String>,
    pub metadata: Option<SkinMetadata>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkinMetadata {
    pub model: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkinModel {
    #[default]
    Classic,
    Slim,
}

impl SkinModel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Slim => "slim",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkinTextureRef {
    pub url: String,
    pub model: SkinModel,
}

impl SessionProfile {
    /// Skin reference from the first profile property.
    pub fn skin_texture(&self) -> AppResult<SkinTextureRef> {
        let property = self.properties.first().ok_or_else(|| {
            SkinError::BadProfileData(format!("El perfil de {} no tiene properties", self.name))
        })?;
        let value = property.value.as_deref().ok_or_else(|| {
            SkinError::BadProfileData(format!(
                "La property de {} no tiene campo value",
                self.name
            ))
        })?;

        decode_textures_property(value)
    }
}

pub fn decode_textures_property(value: &str) -> AppResult<SkinTextureRef> {
    let raw = STANDARD
        .decode(value.trim())
        .map_err(|err| SkinError::BadProfileData(format!("value no es base64 válido: {err}")))?;

    let payload = serde_json::from_slice::<TexturesPayload>(&raw).map_err(|err| {
        SkinError::BadProfileData(format!("value no contiene JSON de texturas: {err}"))
    })?;

    let skin = payload
        .textures
        .and_then(|textures| textures.skin)
        .ok_or_else(|| SkinError::BadProfileData("No existe textures.SKIN".to_string()))?;

    let url = skin
        .url
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| SkinError::BadProfileData("No existe textures.SKIN.url".to_string()))?;

    let model = match skin.metadata.and_then(|metadata| metadata.model).as_deref() {
        Some("slim") => SkinModel::Slim,
        _ => SkinModel::Classic,
    };

    Ok(SkinTextureRef { url, model })
}
