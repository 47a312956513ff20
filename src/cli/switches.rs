//! Slash-style switch parsing
//!
//! Arguments come in `/S <path> /D <path> /T <days>` pairs. Switch names are
//! case-insensitive and every switch is required exactly once.

use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

use crate::playlist::GeneratorConfig;

const SOURCE: &str = "/S";
const DESTINATION: &str = "/D";
const DAYS: &str = "/T";
const HELP: &str = "/?";

const SWITCHES: [&str; 3] = [DESTINATION, SOURCE, DAYS];

/// Text printed for `/?`
pub const HELP_TEXT: &str = concat!(
    "/S\tsource location where all your music is located, root directory e.g. C:\\Users\\Administrator\\Music\\\n",
    "/D\tdestination location where you want .xspf playlist files to appear\n",
    "/T\ttime in days, how many last days to check for to generate recent.xspf playlist",
);

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Run(GeneratorConfig),
}

/// Switch validation failure, reported as a single line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwitchError {
    #[error("No arguments have been specified. Use /? for help.")]
    NoArguments,

    #[error("Parameters number must be even.")]
    OddCount,

    #[error("Too many arguments provided: {count} but the limit is {limit}.")]
    TooMany { count: usize, limit: usize },

    #[error("Unrecognized switch: {0}")]
    Unrecognized(String),

    #[error("Duplicate parameters or parameters specified incorrectly.")]
    Duplicate,

    #[error("Missing required switch: {0}")]
    Missing(&'static str),

    #[error("Invalid number of days: {0}. Expected a whole number between 0 and 65535.")]
    InvalidDays(String),
}

/// Validate raw arguments and turn them into an `Invocation`
///
/// No filesystem access happens here.
pub fn parse_switches(args: &[String]) -> Result<Invocation, SwitchError> {
    if args.is_empty() {
        return Err(SwitchError::NoArguments);
    }

    if args[0] == HELP {
        return Ok(Invocation::Help);
    }

    if args.len() % 2 != 0 {
        return Err(SwitchError::OddCount);
    }

    let limit = SWITCHES.len() * 2;
    if args.len() > limit {
        return Err(SwitchError::TooMany {
            count: args.len(),
            limit,
        });
    }

    let mut values: HashMap<&'static str, &str> = HashMap::new();
    for pair in args.chunks_exact(2) {
        let switch = SWITCHES
            .iter()
            .copied()
            .find(|s| s.eq_ignore_ascii_case(&pair[0]))
            .ok_or_else(|| SwitchError::Unrecognized(pair[0].clone()))?;

        if values.insert(switch, pair[1].as_str()).is_some() {
            return Err(SwitchError::Duplicate);
        }
    }

    let require = |switch: &'static str| values.get(switch).copied().ok_or(SwitchError::Missing(switch));

    let source = require(SOURCE)?;
    let destination = require(DESTINATION)?;
    let days = require(DAYS)?;

    let days = days
        .trim()
        .parse::<u16>()
        .map_err(|_| SwitchError::InvalidDays(days.to_string()))?;

    Ok(Invocation::Run(GeneratorConfig {
        source: PathBuf::from(source),
        destination: PathBuf::from(destination),
        days,
    }))
}
