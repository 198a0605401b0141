use image::RgbaImage;

use super::{
    compose::{crop, paste},
    layout::{
        Region, TextureFormat, BASE_REGIONS, LEGACY_LIMB_REGIONS, MODERN_LIMB_REGIONS,
        OVERLAY_REGIONS, PREVIEW_HEIGHT, PREVIEW_WIDTH,
    },
    texture::SkinTexture,
};

/// Regions pasted onto the preview, in paste order.
pub fn preview_regions(format: TextureFormat, overlays: bool) -> Vec<Region> {
    let mut regions = BASE_REGIONS.to_vec();
    match format {
        TextureFormat::Legacy => regions.extend(LEGACY_LIMB_REGIONS),
        TextureFormat::Modern => {
            regions.extend(MODERN_LIMB_REGIONS);
            // The overlay layer lives in the bottom half, so 64x32 textures never get it.
            if overlays {
                regions.extend(OVERLAY_REGIONS);
            }
        }
    }
    regions
}

/// Builds the flat 16x32 front view of the character.
pub fn render_preview(texture: &SkinTexture, overlays: bool) -> RgbaImage {
    let mut canvas = RgbaImage::new(PREVIEW_WIDTH, PREVIEW_HEIGHT);
    for region in preview_regions(texture.format(), overlays) {
        let patch = crop(texture.image(), region.src);
        paste(&mut canvas, &patch, region.dest, region.mode);
    }
    canvas
}
