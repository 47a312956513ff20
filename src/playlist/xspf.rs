//! XSPF playlist serialization
//!
//! Output matches what VLC writes: UTF-8, CRLF line endings, tab indentation
//! and a `file:///` location per track.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::PlaylistError;
use crate::library::TrackPath;
use crate::utils::encode_path;

/// Most `<track>` elements written into a single playlist
pub const MAX_TRACKS: usize = 9000;

/// File extension for generated playlists
pub const EXTENSION: &str = "xspf";

const HEADER: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\r\n",
    "<playlist xmlns=\"http://xspf.org/ns/0/\" ",
    "xmlns:vlc=\"http://www.videolan.org/vlc/playlist/ns/0/\" version=\"1\">\r\n",
    "\t<title>Playlist</title>\r\n",
    "\t<trackList>\r\n",
);

const FOOTER: &str = concat!("\t</trackList>\r\n", "</playlist>\r\n");

/// A named playlist waiting to be written
#[derive(Debug)]
pub struct PlaylistSpec<'a> {
    pub name: String,
    pub destination: PathBuf,
    pub tracks: &'a [TrackPath],
}

/// Counts from serializing one playlist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XspfSummary {
    /// `<track>` elements written
    pub written: usize,
    /// `desktop.ini` entries left out
    pub skipped: usize,
    /// Tracks were dropped after reaching `MAX_TRACKS`
    pub truncated: bool,
}

/// A playlist file that was written successfully
#[derive(Debug, Clone)]
pub struct PlaylistWritten {
    pub path: PathBuf,
    pub summary: XspfSummary,
}

impl<'a> PlaylistSpec<'a> {
    pub fn new(name: impl Into<String>, destination: &Path, tracks: &'a [TrackPath]) -> Self {
        Self {
            name: name.into(),
            destination: destination.to_path_buf(),
            tracks,
        }
    }

    /// Path of the `.xspf` file this playlist is written to
    pub fn output_path(&self) -> PathBuf {
        self.destination.join(format!("{}.{}", self.name, EXTENSION))
    }

    /// Write the playlist, replacing any existing file
    pub fn write(&self) -> Result<PlaylistWritten, PlaylistError> {
        let path = self.output_path();
        let io_err = |source| PlaylistError::Io {
            path: path.clone(),
            source,
        };

        let file = File::create(&path).map_err(io_err)?;
        let mut out = BufWriter::new(file);
        let summary = write_xspf(&mut out, self.tracks).map_err(io_err)?;
        out.flush().map_err(io_err)?;

        if summary.truncated {
            warn!(
                "Playlist {} reached the limit of {} tracks, remaining tracks were left out",
                self.name, MAX_TRACKS
            );
        }
        debug!(
            "Wrote playlist: {} ({} tracks, {} skipped)",
            path.display(),
            summary.written,
            summary.skipped
        );

        Ok(PlaylistWritten { path, summary })
    }
}

/// Serialize `tracks` as an XSPF document into `out`
///
/// `desktop.ini` entries are skipped. Once `MAX_TRACKS` elements are written
/// the rest are dropped, but the document is still closed properly.
pub fn write_xspf<W: Write>(out: &mut W, tracks: &[TrackPath]) -> io::Result<XspfSummary> {
    let mut summary = XspfSummary::default();

    out.write_all(HEADER.as_bytes())?;

    for track in tracks {
        if track.is_desktop_ini() {
            summary.skipped += 1;
            continue;
        }
        if summary.written == MAX_TRACKS {
            summary.truncated = true;
            break;
        }

        let location = encode_path(&track.as_path().to_string_lossy());
        write!(
            out,
            "\t\t<track>\r\n\t\t\t<location>file:///{}</location>\r\n\t\t</track>\r\n",
            location
        )?;
        summary.written += 1;
    }

    out.write_all(FOOTER.as_bytes())?;
    Ok(summary)
}
