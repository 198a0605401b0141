use std::{io::Read, time::Duration};

use reqwest::{blocking::Client, StatusCode};

use crate::{
    infrastructure::filesystem::config::SkinConfig,
    shared::result::{AppResult, SkinError},
};

pub fn build_http_client(config: &SkinConfig) -> AppResult<Client> {
    let mut builder = Client::builder();
    if !config.use_system_proxy {
        builder = builder.no_proxy();
    }

    builder
        .user_agent(config.user_agent.as_str())
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|err| SkinError::Network(format!("No se pudo crear cliente HTTP: {err}")))
}

/// GET returning status and body text; HTTP error statuses are not errors here.
pub fn get_text(client: &Client, url: &str) -> AppResult<(StatusCode, String)> {
    log::debug!("GET {url}");
    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .map_err(|err| SkinError::Network(format!("No se pudo consultar {url}: {err}")))?;

    let status = response.status();
    let body = response
        .text()
        .map_err(|err| SkinError::Network(format!("No se pudo leer respuesta de {url}: {err}")))?;

    Ok((status, body))
}

/// Streams the texture body, refusing anything larger than `max_bytes`.
pub fn download_texture(client: &Client, url: &str, max_bytes: u64) -> AppResult<Vec<u8>> {
    log::debug!("GET {url}");
    let response = client.get(url).send().map_err(|err| {
        SkinError::TextureDownloadFailed(format!("la petición a {url} falló: {err}"))
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(SkinError::TextureDownloadFailed(format!(
            "HTTP {status} al descargar {url}"
        )));
    }

    if let Some(length) = response.content_length() {
        if length > max_bytes {
            return Err(SkinError::InvalidTexture(format!(
                "{url} anuncia {length} bytes, máximo {max_bytes}"
            )));
        }
    }

    let mut bytes = Vec::new();
    response
        .take(max_bytes + 1)
        .read_to_end(&mut bytes)
        .map_err(|err| {
            SkinError::TextureDownloadFailed(format!("error leyendo el cuerpo de {url}: {err}"))
        })?;

    if bytes.len() as u64 > max_bytes {
        return Err(SkinError::InvalidTexture(format!(
            "{url} supera el tamaño máximo permitido ({max_bytes} bytes)"
        )));
    }

    log::debug!("downloaded {} bytes from {url}", bytes.len());
    Ok(bytes)
}

/// Joins a base endpoint and a single path segment.
pub fn endpoint_url(base: &str, segment: &str) -> String {
    format!("{}/{segment}", base.trim_end_matches('/'))
}

/// Summarizes the usual Mojang error fields of a JSON body.
pub fn extract_error_detail(body: &str) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    let Some(json_body) = parsed else {
        return body.trim().to_string();
    };

    ["error", "errorMessage", "path"]
        .iter()
        .filter_map(|key| json_body.get(*key).and_then(|value| value.as_str()))
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join(" | ")
}
