use super::{parse_log_level, AppConfig};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

#[test]
fn test_no_arguments_uses_sample_dataset_and_error_level() {
    let config = AppConfig::parse(Vec::<String>::new());

    assert_eq!(config.input, None);
    assert_eq!(config.log_level, LevelFilter::ERROR);
}

#[test]
fn test_positional_arguments_set_input_and_level() {
    let config = AppConfig::parse(["data/transactions.csv", "DEBUG"]);

    assert_eq!(config.input, Some(PathBuf::from("data/transactions.csv")));
    assert_eq!(config.log_level, LevelFilter::DEBUG);
}

#[test]
fn test_dash_keeps_sample_dataset_with_explicit_level() {
    let config = AppConfig::parse(["-", "info"]);

    assert_eq!(config.input, None);
    assert_eq!(config.log_level, LevelFilter::INFO);
}

#[test]
fn test_unknown_log_level_falls_back_to_error() {
    assert_eq!(parse_log_level("verbose"), LevelFilter::ERROR);
    assert_eq!(parse_log_level("Warn"), LevelFilter::WARN);
    assert_eq!(parse_log_level("off"), LevelFilter::OFF);
}
