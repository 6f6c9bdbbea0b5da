#[cfg(test)]
mod tests;

use std::path::PathBuf;

use tracing::level_filters::LevelFilter;

pub const USAGE: &str = "Usage: transaction-analyzer [input.csv|input.json:optional] [log_level:optional]";

/// Runtime settings taken from positional command line arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Dataset to load. The built-in sample dataset is used when absent.
    pub input: Option<PathBuf>,
    pub log_level: LevelFilter
}

impl AppConfig {
    pub fn from_args() -> Self {
        Self::parse(std::env::args().skip(1))
    }

    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        let mut args = args.into_iter().map(Into::into);

        let input = args.next()
            .filter(|path| !path.is_empty() && path != "-")
            .map(PathBuf::from);

        let log_level = args.next()
            .map(|level| parse_log_level(&level))
            .unwrap_or(LevelFilter::ERROR);

        Self { input, log_level }
    }
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        "off" => LevelFilter::OFF,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}
