//! Playlist generation run
//!
//! Scans the source folder once, then writes one playlist per subfolder,
//! followed by `all` and `recent`. Playlists are written one at a time and a
//! failure in one does not stop the others.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::xspf::{PlaylistSpec, PlaylistWritten};
use crate::error::{GenerateError, PlaylistError};
use crate::library::classifier::Classification;
use crate::library::{classify, RecencyThreshold};

/// Name of the playlist holding every track
pub const ALL_PLAYLIST: &str = "all";

/// Name of the playlist holding recently added or changed tracks
pub const RECENT_PLAYLIST: &str = "recent";

/// Validated settings for a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Library root to scan
    pub source: PathBuf,
    /// Folder receiving the `.xspf` files
    pub destination: PathBuf,
    /// Size of the recent window in days
    pub days: u16,
}

/// Result of writing one playlist
#[derive(Debug)]
pub struct PlaylistOutcome {
    pub name: String,
    pub result: Result<PlaylistWritten, PlaylistError>,
}

/// Everything a run produced, in the order playlists were written
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub total_tracks: usize,
    /// Tracks directly inside the source folder
    pub root_tracks: usize,
    pub recent_tracks: usize,
    pub folders: usize,
    pub playlists: Vec<PlaylistOutcome>,
}

impl GenerationReport {
    /// Number of playlists that could not be written
    pub fn failures(&self) -> usize {
        self.playlists.iter().filter(|p| p.result.is_err()).count()
    }

    pub fn is_success(&self) -> bool {
        self.failures() == 0
    }

    fn record(&mut self, spec: PlaylistSpec<'_>) {
        let result = spec.write();
        self.push(spec.name, result);
    }

    fn push(&mut self, name: String, result: Result<PlaylistWritten, PlaylistError>) {
        if let Err(e) = &result {
            warn!("Playlist {} failed: {}", name, e);
        }
        self.playlists.push(PlaylistOutcome { name, result });
    }
}

/// Generate every playlist for `config`
///
/// Returns an error only when nothing could be written at all; per-playlist
/// failures are collected in the report.
pub fn generate(config: &GeneratorConfig) -> Result<GenerationReport, GenerateError> {
    generate_with_threshold(config, RecencyThreshold::days_ago(config.days))
}

fn generate_with_threshold(
    config: &GeneratorConfig,
    threshold: RecencyThreshold,
) -> Result<GenerationReport, GenerateError> {
    if !config.source.is_dir() {
        return Err(GenerateError::SourceNotFound(config.source.clone()));
    }

    let source = absolute(&config.source)?;
    let destination = absolute(&config.destination)?;

    info!(
        "Scanning {} (recent since {})",
        source.display(),
        threshold.instant().format("%Y-%m-%d %H:%M")
    );
    let classification = classify(&source, &threshold)?;

    write_playlists(classification, &destination)
}

/// Write the folder playlists, then `all` and `recent`, into `destination`
fn write_playlists(
    classification: Classification,
    destination: &Path,
) -> Result<GenerationReport, GenerateError> {
    fs::create_dir_all(destination).map_err(|source| GenerateError::CreateDestination {
        path: destination.to_path_buf(),
        source,
    })?;

    let mut report = GenerationReport {
        total_tracks: classification.all.len(),
        root_tracks: classification.root_files.len(),
        recent_tracks: classification.recent.len(),
        folders: classification.by_folder.len(),
        playlists: Vec::new(),
    };

    for folder in classification.by_folder {
        if shadows_aggregate(&folder.name) {
            warn!(
                "Folder {} shares its name with a generated playlist and will be overwritten",
                folder.path.display()
            );
        }
        match folder.tracks {
            Ok(tracks) => report.record(PlaylistSpec::new(folder.name, destination, &tracks)),
            Err(source) => report.push(
                folder.name,
                Err(PlaylistError::ReadFolder {
                    path: folder.path,
                    source,
                }),
            ),
        }
    }

    report.record(PlaylistSpec::new(ALL_PLAYLIST, destination, &classification.all));
    report.record(PlaylistSpec::new(RECENT_PLAYLIST, destination, &classification.recent));

    debug!(
        "Wrote {} of {} playlist(s)",
        report.playlists.len() - report.failures(),
        report.playlists.len()
    );

    Ok(report)
}

/// Whether a folder playlist would collide with `all` or `recent`
///
/// Compared without case, since Windows and macOS treat `All.xspf` and
/// `all.xspf` as the same file.
fn shadows_aggregate(name: &str) -> bool {
    name.eq_ignore_ascii_case(ALL_PLAYLIST) || name.eq_ignore_ascii_case(RECENT_PLAYLIST)
}

fn absolute(path: &Path) -> Result<PathBuf, GenerateError> {
    std::path::absolute(path).map_err(|source| GenerateError::ResolvePath {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::classifier::FolderTracks;
    use crate::library::TrackPath;
    use chrono::{Duration, Utc};
    use std::fs::File;
    use std::io;
    use tempfile::TempDir;

    struct Library {
        _dir: TempDir,
        config: GeneratorConfig,
    }

    fn library(days: u16) -> Library {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("music");
        let destination = dir.path().join("playlists");
        fs::create_dir(&source).unwrap();
        Library {
            config: GeneratorConfig {
                source,
                destination,
                days,
            },
            _dir: dir,
        }
    }

    fn touch(path: &Path) {
        File::create(path).unwrap();
    }

    fn track_count(path: &Path) -> usize {
        fs::read_to_string(path).unwrap().matches("<track>").count()
    }

    fn rock_library() -> Library {
        let lib = library(30);
        let src = &lib.config.source;
        touch(&src.join("today.mp3"));
        fs::create_dir(src.join("Rock")).unwrap();
        touch(&src.join("Rock").join("one.mp3"));
        touch(&src.join("Rock").join("two.mp3"));
        lib
    }

    #[test]
    fn test_rock_library() {
        let lib = rock_library();
        let report = generate(&lib.config).unwrap();
        let dest = &lib.config.destination;

        assert!(report.is_success());
        assert_eq!(report.total_tracks, 3);
        assert_eq!(report.root_tracks, 1);
        assert_eq!(track_count(&dest.join("all.xspf")), 3);
        assert_eq!(track_count(&dest.join("Rock.xspf")), 2);

        let recent = fs::read_to_string(dest.join("recent.xspf")).unwrap();
        assert!(recent.contains("today.mp3"));
    }

    #[test]
    fn test_write_order() {
        let lib = rock_library();
        let report = generate(&lib.config).unwrap();
        let names: Vec<&str> = report.playlists.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Rock", "all", "recent"]);
    }

    #[test]
    fn test_root_files_stay_out_of_folder_playlists() {
        let lib = rock_library();
        generate(&lib.config).unwrap();
        let rock = fs::read_to_string(lib.config.destination.join("Rock.xspf")).unwrap();
        assert!(!rock.contains("today.mp3"));
    }

    #[test]
    fn test_desktop_ini_never_written() {
        let lib = rock_library();
        touch(&lib.config.source.join("desktop.ini"));
        touch(&lib.config.source.join("Rock").join("Desktop.ini"));

        let report = generate(&lib.config).unwrap();
        assert_eq!(report.total_tracks, 5);

        let dest = &lib.config.destination;
        assert_eq!(track_count(&dest.join("all.xspf")), 3);
        assert_eq!(track_count(&dest.join("Rock.xspf")), 2);
        for name in ["all", "recent", "Rock"] {
            let doc = fs::read_to_string(dest.join(format!("{}.xspf", name))).unwrap();
            assert!(!doc.to_lowercase().contains("desktop"));
        }
    }

    #[test]
    fn test_empty_recent_still_written() {
        let lib = rock_library();
        let future = RecencyThreshold::at(Utc::now() + Duration::days(1));
        generate_with_threshold(&lib.config, future).unwrap();
        assert_eq!(track_count(&lib.config.destination.join("recent.xspf")), 0);
    }

    #[test]
    fn test_missing_source_writes_nothing() {
        let lib = library(30);
        let config = GeneratorConfig {
            source: lib.config.source.join("missing"),
            ..lib.config.clone()
        };

        let err = generate(&config).unwrap_err();
        assert!(matches!(err, GenerateError::SourceNotFound(_)));
        assert_eq!(err.to_string(), format!("Folder not found {}", config.source.display()));
        assert!(!config.destination.exists());
    }

    #[test]
    fn test_source_file_is_not_a_folder() {
        let lib = library(30);
        let file = lib.config.source.join("song.mp3");
        touch(&file);
        let config = GeneratorConfig {
            source: file,
            ..lib.config.clone()
        };
        assert!(matches!(
            generate(&config),
            Err(GenerateError::SourceNotFound(_))
        ));
    }

    #[test]
    fn test_failed_playlist_does_not_stop_others() {
        let lib = rock_library();
        // A directory squatting on the output path makes that one write fail
        fs::create_dir_all(lib.config.destination.join("Rock.xspf")).unwrap();

        let report = generate(&lib.config).unwrap();
        assert_eq!(report.failures(), 1);
        assert!(!report.is_success());

        let rock = report.playlists.iter().find(|p| p.name == "Rock").unwrap();
        assert!(rock.result.is_err());
        assert_eq!(track_count(&lib.config.destination.join("all.xspf")), 3);
        assert!(lib.config.destination.join("recent.xspf").is_file());
    }

    #[test]
    fn test_creates_destination() {
        let lib = rock_library();
        assert!(!lib.config.destination.exists());
        generate(&lib.config).unwrap();
        assert!(lib.config.destination.join("all.xspf").is_file());
    }

    fn track(path: &Path) -> TrackPath {
        TrackPath {
            path: path.to_path_buf(),
            created: None,
            modified: None,
        }
    }

    #[test]
    fn test_unreadable_folder_is_a_failure() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("playlists");
        fs::create_dir(&dest).unwrap();
        fs::write(dest.join("Rock.xspf"), "previous").unwrap();

        let jazz = track(&dir.path().join("Jazz").join("a.mp3"));
        let classification = Classification {
            by_folder: vec![
                FolderTracks {
                    name: "Rock".to_string(),
                    path: dir.path().join("Rock"),
                    tracks: Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied")),
                },
                FolderTracks {
                    name: "Jazz".to_string(),
                    path: dir.path().join("Jazz"),
                    tracks: Ok(vec![jazz.clone()]),
                },
            ],
            all: vec![jazz],
            ..Classification::default()
        };

        let report = write_playlists(classification, &dest).unwrap();
        assert_eq!(report.failures(), 1);

        let rock = report.playlists.iter().find(|p| p.name == "Rock").unwrap();
        assert!(matches!(rock.result, Err(PlaylistError::ReadFolder { .. })));
        // Last good playlist survives
        assert_eq!(fs::read_to_string(dest.join("Rock.xspf")).unwrap(), "previous");

        assert_eq!(track_count(&dest.join("Jazz.xspf")), 1);
        assert_eq!(track_count(&dest.join("all.xspf")), 1);
    }

    #[test]
    fn test_write_playlists_creates_destination() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("nested").join("playlists");

        let report = write_playlists(Classification::default(), &dest).unwrap();
        assert!(report.is_success());
        assert!(dest.join("all.xspf").is_file());
        assert!(dest.join("recent.xspf").is_file());
    }

    #[test]
    fn test_shadows_aggregate_ignores_case() {
        assert!(shadows_aggregate("all"));
        assert!(shadows_aggregate("ALL"));
        assert!(shadows_aggregate("Recent"));
        assert!(!shadows_aggregate("Rock"));
        assert!(!shadows_aggregate("allsorts"));
    }
}
