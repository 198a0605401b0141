use std::{
    fs, io,
    path::{Path, PathBuf},
};

use image::RgbaImage;

use super::paths::{preview_path, skin_path};
use crate::{commands::skin_processor::encode_png, shared::result::AppResult};

#[derive(Debug, Clone)]
pub struct SkinArtifacts {
    pub skin: RgbaImage,
    pub preview: Option<RgbaImage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    pub skin: PathBuf,
    pub preview: Option<PathBuf>,
}

/// Writes `<player>.png` and, when present, `preview_<player>.png`.
/// Existing files are overwritten. Every image is encoded before the first
/// write, and a failed write removes the files already placed by this call.
pub fn write_artifacts(
    output_dir: &Path,
    player: &str,
    artifacts: &SkinArtifacts,
) -> AppResult<WrittenFiles> {
    let skin = skin_path(output_dir, player);
    let mut pending = vec![(skin.clone(), encode_png(&artifacts.skin)?)];

    let preview = match &artifacts.preview {
        Some(image) => {
            let path = preview_path(output_dir, player);
            pending.push((path.clone(), encode_png(image)?));
            Some(path)
        }
        None => None,
    };

    fs::create_dir_all(output_dir)?;

    let mut placed: Vec<&Path> = Vec::with_capacity(pending.len());
    for (path, bytes) in &pending {
        if let Err(err) = place_file(path, bytes) {
            for done in placed {
                if let Err(cleanup) = fs::remove_file(done) {
                    log::warn!("could not remove {}: {cleanup}", done.display());
                }
            }
            return Err(err.into());
        }
        log::debug!("wrote {}", path.display());
        placed.push(path);
    }

    Ok(WrittenFiles { skin, preview })
}

// Staged next to the target, then renamed over it.
fn place_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let staging = path.with_extension("png.part");
    fs::write(&staging, bytes)?;
    fs::rename(&staging, path).map_err(|err| {
        let _ = fs::remove_file(&staging);
        err
    })
}
