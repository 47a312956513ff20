//! Playlist writing and generation

pub mod generator;
pub mod xspf;

pub use generator::{generate, GeneratorConfig};
pub use xspf::MAX_TRACKS;
