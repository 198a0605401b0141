//! Fixed pixel layout of the Minecraft skin texture and of the preview canvas.
//!
//! Every rectangle is `(x0, y0, x1, y1)` with exclusive right/bottom edges.

pub const SKIN_WIDTH: u32 = 64;
pub const LEGACY_HEIGHT: u32 = 32;
pub const MODERN_HEIGHT: u32 = 64;
pub const FRONT_HEIGHT: u32 = 32;

pub const PREVIEW_WIDTH: u32 = 16;
pub const PREVIEW_HEIGHT: u32 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl Rect {
    pub const fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub const fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    pub const fn height(&self) -> u32 {
        self.y1 - self.y0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFormat {
    /// 64x32, pre-1.8 layout: no overlay band, no separate left limbs.
    Legacy,
    /// 64x64 with overlay band and left limb regions.
    Modern,
}

impl TextureFormat {
    pub fn from_dimensions(width: u32, height: u32) -> Option<Self> {
        match (width, height) {
            (SKIN_WIDTH, LEGACY_HEIGHT) => Some(Self::Legacy),
            (SKIN_WIDTH, MODERN_HEIGHT) => Some(Self::Modern),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Legacy => "legacy 64x32",
            Self::Modern => "64x64",
        }
    }
}

/// How a crop lands on its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteMode {
    /// Overwrite every pixel, alpha included.
    Replace,
    /// Use the crop's own alpha channel as the blend mask.
    AlphaMask,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub name: &'static str,
    pub src: Rect,
    pub dest: Point,
    pub mode: PasteMode,
}

impl Region {
    const fn masked(name: &'static str, src: Rect, dest: Point) -> Self {
        Self {
            name,
            src,
            dest,
            mode: PasteMode::AlphaMask,
        }
    }
}

// Normalized front skin.
pub const FRONT_SRC_RECT: Rect = Rect::new(0, 0, SKIN_WIDTH, FRONT_HEIGHT);
pub const OVERLAY_BAND_SRC_RECT: Rect = Rect::new(0, 32, SKIN_WIDTH, 48);
pub const OVERLAY_BAND_DEST: Point = Point::new(0, 16);

// Preview, base layer.
pub const HEAD_SRC_RECT: Rect = Rect::new(8, 8, 16, 16);
pub const HEAD_DEST: Point = Point::new(4, 0);
pub const HAT_SRC_RECT: Rect = Rect::new(40, 8, 48, 16);
pub const HAT_DEST: Point = HEAD_DEST;
pub const BODY_SRC_RECT: Rect = Rect::new(20, 20, 28, 32);
pub const BODY_DEST: Point = Point::new(4, 8);
pub const RIGHT_ARM_SRC_RECT: Rect = Rect::new(44, 20, 48, 32);
pub const RIGHT_ARM_DEST: Point = Point::new(0, 8);
pub const RIGHT_LEG_SRC_RECT: Rect = Rect::new(4, 20, 8, 32);
pub const RIGHT_LEG_DEST: Point = Point::new(4, 20);

// Left limbs; the 64x32 layout has none and reuses the right-limb art.
pub const LEFT_ARM_SRC_RECT: Rect = Rect::new(36, 52, 40, 64);
pub const LEFT_ARM_DEST: Point = Point::new(12, 8);
pub const LEFT_LEG_SRC_RECT: Rect = Rect::new(20, 52, 24, 64);
pub const LEFT_LEG_DEST: Point = Point::new(8, 20);
pub const LEGACY_LEFT_ARM_SRC_RECT: Rect = RIGHT_ARM_SRC_RECT;
pub const LEGACY_LEFT_LEG_SRC_RECT: Rect = RIGHT_LEG_SRC_RECT;

// Second layer.
pub const RIGHT_LEG_OVERLAY_SRC_RECT: Rect = Rect::new(4, 36, 8, 48);
pub const LEFT_LEG_OVERLAY_SRC_RECT: Rect = Rect::new(4, 52, 8, 64);
pub const RIGHT_ARM_OVERLAY_SRC_RECT: Rect = Rect::new(40, 36, 44, 48);
pub const LEFT_ARM_OVERLAY_SRC_RECT: Rect = Rect::new(52, 52, 56, 64);
pub const BODY_OVERLAY_SRC_RECT: Rect = Rect::new(20, 36, 28, 48);

pub const BASE_REGIONS: [Region; 5] = [
    Region {
        name: "head",
        src: HEAD_SRC_RECT,
        dest: HEAD_DEST,
        mode: PasteMode::Replace,
    },
    Region::masked("hat", HAT_SRC_RECT, HAT_DEST),
    Region::masked("body", BODY_SRC_RECT, BODY_DEST),
    Region::masked("right_arm", RIGHT_ARM_SRC_RECT, RIGHT_ARM_DEST),
    Region::masked("right_leg", RIGHT_LEG_SRC_RECT, RIGHT_LEG_DEST),
];

pub const MODERN_LIMB_REGIONS: [Region; 2] = [
    Region::masked("left_arm", LEFT_ARM_SRC_RECT, LEFT_ARM_DEST),
    Region::masked("left_leg", LEFT_LEG_SRC_RECT, LEFT_LEG_DEST),
];

pub const LEGACY_LIMB_REGIONS: [Region; 2] = [
    Region::masked("left_arm", LEGACY_LEFT_ARM_SRC_RECT, LEFT_ARM_DEST),
    Region::masked("left_leg", LEGACY_LEFT_LEG_SRC_RECT, LEFT_LEG_DEST),
];

pub const OVERLAY_REGIONS: [Region; 5] = [
    Region::masked("right_leg_overlay", RIGHT_LEG_OVERLAY_SRC_RECT, RIGHT_LEG_DEST),
    Region::masked("left_leg_overlay", LEFT_LEG_OVERLAY_SRC_RECT, LEFT_LEG_DEST),
    Region::masked("right_arm_overlay", RIGHT_ARM_OVERLAY_SRC_RECT, RIGHT_ARM_DEST),
    Region::masked("left_arm_overlay", LEFT_ARM_OVERLAY_SRC_RECT, LEFT_ARM_DEST),
    Region::masked("body_overlay", BODY_OVERLAY_SRC_RECT, BODY_DEST),
];
