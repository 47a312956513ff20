//! Music library scanning

pub mod classifier;
pub mod track;

pub use classifier::classify;
pub use track::{RecencyThreshold, TrackPath};
