//! Track files and the recency threshold

use chrono::{DateTime, Duration, Utc};
use std::fs::Metadata;
use std::path::{Path, PathBuf};

/// Windows folder settings file, never written into a playlist
const DESKTOP_INI: &str = "desktop.ini";

/// A candidate media file found while scanning the library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackPath {
    /// Absolute path to the file
    pub path: PathBuf,
    /// Creation time, when the filesystem reports one
    pub created: Option<DateTime<Utc>>,
    /// Last modification time
    pub modified: Option<DateTime<Utc>>,
}

impl TrackPath {
    /// Build a track from a path and the metadata read for it
    pub fn from_metadata(path: PathBuf, metadata: &Metadata) -> Self {
        Self {
            path,
            created: metadata.created().ok().map(DateTime::<Utc>::from),
            modified: metadata.modified().ok().map(DateTime::<Utc>::from),
        }
    }

    /// Check whether the path mentions `desktop.ini` in any letter case
    pub fn is_desktop_ini(&self) -> bool {
        self.path
            .to_string_lossy()
            .to_lowercase()
            .contains(DESKTOP_INI)
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }
}

/// Oldest instant a file may carry and still count as recent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecencyThreshold(DateTime<Utc>);

impl RecencyThreshold {
    /// Threshold `days` days before the current time
    pub fn days_ago(days: u16) -> Self {
        Self::days_before(Utc::now(), days)
    }

    /// Threshold `days` days before `now`
    pub fn days_before(now: DateTime<Utc>, days: u16) -> Self {
        Self::at(now - Duration::days(i64::from(days)))
    }

    /// Threshold at an exact instant
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.0
    }

    /// A track is recent when it was created or modified at or after the threshold
    pub fn admits(&self, track: &TrackPath) -> bool {
        let after = |time: Option<DateTime<Utc>>| time.is_some_and(|t| t >= self.0);
        after(track.created) || after(track.modified)
    }
}
