//! CLI module for xspfgen

use clap::Parser;

pub mod commands;
pub mod switches;

pub use switches::{parse_switches, Invocation, HELP_TEXT};

#[derive(Parser, Debug)]
#[command(name = "xspfgen", about = "Generate VLC playlists from a music folder")]
#[command(version)]
#[command(after_help = "Switches:\n  /S <path>   music folder to scan\n  /D <path>   folder to write .xspf files into\n  /T <days>   window for recent.xspf (0-65535)\n  /?          show switch help")]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, env = "XSPFGEN_VERBOSE")]
    pub verbose: bool,

    /// Switches in `/S <path> /D <path> /T <days>` form
    #[arg(value_name = "SWITCHES", allow_negative_numbers = true)]
    pub switches: Vec<String>,
}
