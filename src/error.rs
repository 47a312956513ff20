//! Error types for playlist generation
//!
//! Errors are split by how much of a run they take down:
//! - `GenerateError` aborts the whole run before any playlist is written
//! - `PlaylistError` fails one playlist; the remaining ones are still written

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Run-level failure
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Source folder is missing or not a directory
    #[error("Folder not found {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Failed to resolve path {}: {source}", path.display())]
    ResolvePath { path: PathBuf, source: io::Error },

    #[error("Failed to read folder {}: {source}", path.display())]
    ReadFolder { path: PathBuf, source: io::Error },

    #[error("Failed to create destination folder {}: {source}", path.display())]
    CreateDestination { path: PathBuf, source: io::Error },
}

/// Failure producing a single playlist
#[derive(Error, Debug)]
pub enum PlaylistError {
    /// Source subfolder could not be listed, so its playlist was left alone
    #[error("Failed to read folder {}: {source}", path.display())]
    ReadFolder { path: PathBuf, source: io::Error },

    #[error("Failed to write {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}
