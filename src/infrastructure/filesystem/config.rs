use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::shared::result::{AppResult, SkinError};

pub const DEFAULT_NAME_LOOKUP_URL: &str = "https://api.mojang.com/users/profiles/minecraft";
pub const DEFAULT_PROFILE_LOOKUP_URL: &str =
    "https://sessionserver.mojang.com/session/minecraft/profile";
pub const DEFAULT_MAX_TEXTURE_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SkinConfig {
    pub name_lookup_url: String,
    pub profile_lookup_url: String,
    pub user_agent: String,
    pub connect_timeout_secs: u64,
    pub timeout_secs: u64,
    pub max_texture_bytes: u64,
    pub use_system_proxy: bool,
    pub output_dir: Option<PathBuf>,
}

impl Default for SkinConfig {
    fn default() -> Self {
        Self {
            name_lookup_url: DEFAULT_NAME_LOOKUP_URL.to_string(),
            profile_lookup_url: DEFAULT_PROFILE_LOOKUP_URL.to_string(),
            user_agent: concat!("skin-grab/", env!("CARGO_PKG_VERSION")).to_string(),
            connect_timeout_secs: 10,
            timeout_secs: 30,
            max_texture_bytes: DEFAULT_MAX_TEXTURE_BYTES,
            use_system_proxy: true,
            output_dir: None,
        }
    }
}

impl SkinConfig {
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

pub fn load_config(path: Option<&Path>) -> AppResult<SkinConfig> {
    let Some(path) = path else {
        return Ok(SkinConfig::default());
    };

    let raw = fs::read_to_string(path).map_err(|err| {
        SkinError::Config(format!(
            "No se pudo leer la configuración {}: {err}",
            path.display()
        ))
    })?;

    let config = serde_json::from_str::<SkinConfig>(&raw).map_err(|err| {
        SkinError::Config(format!(
            "No se pudo parsear la configuración {}: {err}",
            path.display()
        ))
    })?;

    if config.timeout_secs == 0 || config.connect_timeout_secs == 0 {
        return Err(SkinError::Config(format!(
            "Los timeouts de {} deben ser mayores que cero",
            path.display()
        )));
    }

    Ok(config)
}
