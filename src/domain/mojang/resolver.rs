use reqwest::blocking::Client;
use uuid::Uuid;

use super::profile::{NameLookupResponse, SessionProfile, SkinModel};
use crate::{
    commands::validator::{decode_skin_png, validate_player_name},
    domain::skin::texture::SkinTexture,
    infrastructure::{
        filesystem::config::SkinConfig,
        http::client::{download_texture, endpoint_url, extract_error_detail, get_text},
    },
    shared::result::{AppResult, SkinError},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerIdentity {
    pub name: String,
    pub uuid: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerProfile {
    pub uuid: Uuid,
    pub display_name: String,
    pub skin_url: String,
    pub model: SkinModel,
}

#[derive(Debug, Clone)]
pub struct ResolvedSkin {
    pub uuid: Uuid,
    pub display_name: String,
    pub model: SkinModel,
    pub texture: SkinTexture,
}

pub fn lookup_player_uuid(
    client: &Client,
    config: &SkinConfig,
    name: &str,
) -> AppResult<PlayerIdentity> {
    let name = validate_player_name(name)?;
    let url = endpoint_url(&config.name_lookup_url, name);
    let (status, body) = get_text(client, &url)?;

    if !status.is_success() {
        log::warn!(
            "name lookup for {name} returned HTTP {status}: {}",
            extract_error_detail(&body)
        );
        return Err(SkinError::player_not_found(name));
    }

    let lookup = serde_json::from_str::<NameLookupResponse>(&body).map_err(|err| {
        log::warn!("player {name} not found ({})", parse_failure_detail(&err, &body));
        SkinError::player_not_found(name)
    })?;

    log::info!("resolved {} -> {}", lookup.name, lookup.id.hyphenated());
    Ok(PlayerIdentity {
        name: lookup.name,
        uuid: lookup.id,
    })
}

pub fn lookup_profile(client: &Client, config: &SkinConfig, uuid: Uuid) -> AppResult<PlayerProfile> {
    let uuid_text = uuid.simple().to_string();
    let url = endpoint_url(&config.profile_lookup_url, &uuid_text);
    let (status, body) = get_text(client, &url)?;

    if !status.is_success() {
        log::warn!(
            "profile lookup for {uuid_text} returned HTTP {status}: {}",
            extract_error_detail(&body)
        );
        return Err(SkinError::uuid_not_found(&uuid_text));
    }

    let profile = serde_json::from_str::<SessionProfile>(&body).map_err(|err| {
        log::warn!(
            "player with uuid {uuid_text} not found ({})",
            parse_failure_detail(&err, &body)
        );
        SkinError::uuid_not_found(&uuid_text)
    })?;

    let skin = profile.skin_texture()?;
    log::info!(
        "profile {} uses a {} skin at {}",
        profile.name,
        skin.model.label(),
        skin.url
    );

    Ok(PlayerProfile {
        uuid,
        display_name: profile.name,
        skin_url: skin.url,
        model: skin.model,
    })
}

fn parse_failure_detail(err: &serde_json::Error, body: &str) -> String {
    let detail = extract_error_detail(body);
    if detail.is_empty() {
        err.to_string()
    } else {
        format!("{err}: {detail}")
    }
}

pub fn fetch_skin_texture(
    client: &Client,
    config: &SkinConfig,
    profile: &PlayerProfile,
) -> AppResult<SkinTexture> {
    let bytes = download_texture(client, &profile.skin_url, config.max_texture_bytes)?;
    decode_skin_png(&bytes)
}

pub fn resolve_by_uuid(client: &Client, config: &SkinConfig, uuid: Uuid) -> AppResult<ResolvedSkin> {
    let profile = lookup_profile(client, config, uuid)?;
    let texture = fetch_skin_texture(client, config, &profile)?;

    Ok(ResolvedSkin {
        uuid: profile.uuid,
        display_name: profile.display_name,
        model: profile.model,
        texture,
    })
}

pub fn resolve_by_name(client: &Client, config: &SkinConfig, name: &str) -> AppResult<ResolvedSkin> {
    let identity = lookup_player_uuid(client, config, name)?;
    resolve_by_uuid(client, config, identity.uuid)
}
