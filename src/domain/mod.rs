pub mod mojang;
pub mod skin;
