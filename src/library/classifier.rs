//! Library folder classification
//!
//! Splits a library root into its loose files and one group per immediate
//! subfolder, and picks out the recent tracks along the way. Only one level of
//! subfolders is read; anything nested deeper is ignored.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::track::{RecencyThreshold, TrackPath};
use crate::error::GenerateError;

/// Tracks found in one subfolder of the library root
#[derive(Debug)]
pub struct FolderTracks {
    /// Leaf name of the folder, used as its playlist name
    pub name: String,
    pub path: PathBuf,
    /// Folder contents, or the error that kept it from being listed
    pub tracks: io::Result<Vec<TrackPath>>,
}

/// Result of scanning a library root
///
/// Groups keep directory listing order, which is whatever the filesystem
/// returns and may differ between platforms.
#[derive(Debug, Default)]
pub struct Classification {
    /// Files directly inside the root
    pub root_files: Vec<TrackPath>,
    /// One entry per immediate subfolder
    pub by_folder: Vec<FolderTracks>,
    /// Tracks passing the recency test, root files first
    pub recent: Vec<TrackPath>,
    /// Every track, root files first
    pub all: Vec<TrackPath>,
}

/// Immediate contents of a single directory
#[derive(Debug, Default)]
struct Listing {
    files: Vec<TrackPath>,
    folders: Vec<PathBuf>,
}

/// Classify the library rooted at `root`
///
/// `desktop.ini` files are kept here; the playlist writer drops them.
pub fn classify(root: &Path, threshold: &RecencyThreshold) -> Result<Classification, GenerateError> {
    let listing = list_dir(root).map_err(|source| GenerateError::ReadFolder {
        path: root.to_path_buf(),
        source,
    })?;

    let mut classification = Classification::default();

    for track in listing.files {
        classification.push(&track, threshold);
        classification.root_files.push(track);
    }

    for folder in listing.folders {
        let name = folder
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| folder.to_string_lossy().into_owned());

        let tracks = match list_dir(&folder) {
            Ok(sub) => {
                if !sub.folders.is_empty() {
                    debug!(
                        "Ignoring {} nested folder(s) in {}",
                        sub.folders.len(),
                        folder.display()
                    );
                }
                Ok(sub.files)
            }
            Err(e) => {
                warn!("Failed to read folder {}: {}", folder.display(), e);
                Err(e)
            }
        };

        if let Ok(tracks) = &tracks {
            for track in tracks {
                classification.push(track, threshold);
            }
            debug!("Folder {}: {} track(s)", name, tracks.len());
        }

        classification.by_folder.push(FolderTracks {
            name,
            path: folder,
            tracks,
        });
    }

    debug!(
        "Classified {} track(s), {} recent, {} folder(s)",
        classification.all.len(),
        classification.recent.len(),
        classification.by_folder.len()
    );

    Ok(classification)
}

impl Classification {
    fn push(&mut self, track: &TrackPath, threshold: &RecencyThreshold) {
        if threshold.admits(track) {
            self.recent.push(track.clone());
        }
        self.all.push(track.clone());
    }
}

/// List files and folders directly inside `dir`, in listing order
fn list_dir(dir: &Path) -> io::Result<Listing> {
    let mut listing = Listing::default();

    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        let path = entry.path();
        // Follows symlinks, so linked files and folders count as their targets
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        if metadata.is_file() {
            listing.files.push(TrackPath::from_metadata(path, &metadata));
        } else if metadata.is_dir() {
            listing.folders.push(path);
        }
    }

    Ok(listing)
}
