use uuid::Uuid;

use crate::{
    domain::{
        mojang::{
            profile::SkinModel,
            resolver::{resolve_by_name, resolve_by_uuid},
        },
        skin::{layout::TextureFormat, normalizer::normalize_skin, preview::render_preview},
    },
    infrastructure::{
        filesystem::{
            config::SkinConfig,
            output::{write_artifacts, SkinArtifacts, WrittenFiles},
        },
        http::client::build_http_client,
    },
    shared::result::AppResult,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerQuery {
    Name(String),
    Uuid(Uuid),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub query: PlayerQuery,
    pub overlays: bool,
    pub write_preview: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkinReport {
    pub player: String,
    pub uuid: Uuid,
    pub format: TextureFormat,
    pub model: SkinModel,
    pub files: WrittenFiles,
}

/// Resolves the player, builds the normalized skin and preview, and writes both.
pub fn grab_skin(config: &SkinConfig, options: &RunOptions) -> AppResult<SkinReport> {
    let client = build_http_client(config)?;

    let resolved = match &options.query {
        PlayerQuery::Name(name) => resolve_by_name(&client, config, name)?,
        PlayerQuery::Uuid(uuid) => resolve_by_uuid(&client, config, *uuid)?,
    };

    let format = resolved.texture.format();
    log::info!(
        "processing {} texture for {} (overlays: {})",
        format.label(),
        resolved.display_name,
        options.overlays
    );

    let artifacts = SkinArtifacts {
        skin: normalize_skin(&resolved.texture, options.overlays),
        preview: options
            .write_preview
            .then(|| render_preview(&resolved.texture, options.overlays)),
    };

    let files = write_artifacts(&config.output_dir(), &resolved.display_name, &artifacts)?;

    Ok(SkinReport {
        player: resolved.display_name,
        uuid: resolved.uuid,
        format,
        model: resolved.model,
        files,
    })
}
