use image::{imageops, Rgba, RgbaImage};

use super::layout::{PasteMode, Point, Rect};

pub fn crop(image: &RgbaImage, rect: Rect) -> RgbaImage {
    imageops::crop_imm(image, rect.x0, rect.y0, rect.width(), rect.height()).to_image()
}

/// Pastes `patch` onto `canvas` with its top-left corner at `dest`.
/// Pixels falling outside the canvas are dropped.
pub fn paste(canvas: &mut RgbaImage, patch: &RgbaImage, dest: Point, mode: PasteMode) {
    match mode {
        PasteMode::Replace => {
            imageops::replace(canvas, patch, i64::from(dest.x), i64::from(dest.y));
        }
        PasteMode::AlphaMask => paste_masked(canvas, patch, dest),
    }
}

fn paste_masked(canvas: &mut RgbaImage, patch: &RgbaImage, dest: Point) {
    let (canvas_width, canvas_height) = canvas.dimensions();

    for (x, y, source) in patch.enumerate_pixels() {
        let target_x = dest.x + x;
        let target_y = dest.y + y;
        if target_x >= canvas_width || target_y >= canvas_height {
            continue;
        }

        let mask = source[3];
        if mask == 0 {
            continue;
        }

        let target = canvas.get_pixel_mut(target_x, target_y);
        *target = if mask == u8::MAX {
            *source
        } else {
            blend(*target, *source, mask)
        };
    }
}

// Linear mix of every channel, alpha included, weighted by the mask.
fn blend(under: Rgba<u8>, over: Rgba<u8>, mask: u8) -> Rgba<u8> {
    let weight = u16::from(mask);
    let inverse = u16::from(u8::MAX) - weight;
    let mut mixed = [0_u8; 4];
    for (channel, value) in mixed.iter_mut().enumerate() {
        let sum = u16::from(over[channel]) * weight + u16::from(under[channel]) * inverse;
        *value = ((sum + 127) / 255) as u8;
    }
    Rgba(mixed)
}
