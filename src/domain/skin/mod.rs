pub mod compose;
pub mod layout;
pub mod normalizer;
pub mod preview;
pub mod texture;
