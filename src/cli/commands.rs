//! CLI command handlers

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::debug;

use crate::error::GenerateError;
use crate::playlist::{self, GeneratorConfig, MAX_TRACKS};

/// Handle a playlist generation run
pub fn generate(config: &GeneratorConfig) -> Result<()> {
    println!(
        "{}",
        format!("Scanning {}...", config.source.display()).cyan()
    );

    let report = match playlist::generate(config) {
        Ok(report) => report,
        Err(e @ GenerateError::SourceNotFound(_)) => {
            println!("{}", e.to_string().yellow());
            return Ok(());
        }
        Err(e) => return Err(e).context("Playlist generation failed"),
    };

    println!(
        "Found {} track(s): {} in the root folder, {} subfolder(s), {} recent",
        report.total_tracks, report.root_tracks, report.folders, report.recent_tracks
    );
    println!();

    for outcome in &report.playlists {
        match &outcome.result {
            Ok(written) => {
                debug!("{} -> {}", outcome.name, written.path.display());
                println!(
                    "  {} {} ({} tracks)",
                    "✓".green(),
                    outcome.name,
                    written.summary.written
                );
                if written.summary.truncated {
                    println!(
                        "    {}",
                        format!("Stopped at {} tracks, the rest were left out", MAX_TRACKS).yellow()
                    );
                }
            }
            Err(e) => {
                println!("  {} {}: {}", "✗".red(), outcome.name, e);
            }
        }
    }

    println!();
    if !report.is_success() {
        anyhow::bail!(
            "{} of {} playlist(s) could not be written",
            report.failures(),
            report.playlists.len()
        );
    }

    println!(
        "{} {} playlist(s) written to {}",
        "Done!".green().bold(),
        report.playlists.len(),
        config.destination.display()
    );

    Ok(())
}
