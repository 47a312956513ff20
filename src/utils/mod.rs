//! Utility functions

mod encode;

pub use encode::encode_path;
