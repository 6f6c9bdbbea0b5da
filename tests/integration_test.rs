use std::collections::HashMap;
use std::path::Path;
use std::process::{Command, Output};
use anyhow::{anyhow, Result};

fn run_cli(args: &[&str]) -> Result<Output> {
    let binary_path = env!("CARGO_BIN_EXE_transaction-analyzer");

    Ok(Command::new(binary_path).args(args).output()?)
}

fn parse_report(stdout: &str) -> HashMap<String, String> {
    stdout.lines()
        .filter_map(|line| line.split_once(": "))
        .map(|(label, value)| (label.to_string(), value.to_string()))
        .collect()
}

#[test]
fn test_cli_reports_builtin_sample_without_arguments() -> Result<()> {
    let output = run_cli(&[])?;

    assert!(output.status.success());

    let report = parse_report(&String::from_utf8(output.stdout)?);

    assert_eq!(report.get("total_amount").map(String::as_str), Some("150"));
    assert_eq!(report.get("total_amount_by_date(2019-1-1)").map(String::as_str), Some("100"));
    assert_eq!(report.get("average_transaction_amount").map(String::as_str), Some("75"));
    assert_eq!(report.get("most_transaction_types").map(String::as_str), Some("equal"));
    assert_eq!(report.get("validation").map(String::as_str), Some("ok"));

    Ok(())
}

#[test]
fn test_cli_csv_sample_matches_builtin_sample() -> Result<()> {
    let sample_path = Path::new("samples").join("sample.csv");
    let sample_path = sample_path.to_str().ok_or_else(|| anyhow!("sample path is not valid UTF-8"))?;

    let from_file = run_cli(&[sample_path])?;
    let builtin = run_cli(&[])?;

    assert!(from_file.status.success());
    assert_eq!(from_file.stdout, builtin.stdout);

    Ok(())
}

#[test]
fn test_cli_outputs_correct_results_for_json_fixture() -> Result<()> {
    let fixture_path = Path::new("samples").join("fixed.json");
    let fixture_path = fixture_path.to_str().ok_or_else(|| anyhow!("fixture path is not valid UTF-8"))?;

    let output = run_cli(&[fixture_path, "info"])?;

    assert!(output.status.success());

    let report = parse_report(&String::from_utf8(output.stdout)?);
    let get = |label: &str| report.get(label).cloned().ok_or_else(|| anyhow!("{label} missing from output"));

    assert_eq!(get("total_amount")?, "200");
    assert_eq!(get("total_debit_amount")?, "150");
    assert_eq!(get("most_transactions_month")?, "1");
    assert_eq!(get("most_debit_transaction_month")?, "3");
    assert_eq!(get("most_transaction_types")?, "debit");
    assert_eq!(get("unique_transaction_types")?, r#"["debit","credit"]"#);
    assert_eq!(get("exact_total_amount")?, "200.00");

    let merchant = get("transactions_by_merchant(SuperMart)")?;
    let records: Vec<serde_json::Value> = serde_json::from_str(&merchant)?;
    let ids: Vec<&str> = records.iter().filter_map(|record| record["transaction_id"].as_str()).collect();

    assert_eq!(ids, vec!["1", "3"]);

    Ok(())
}

#[test]
fn test_cli_fails_for_missing_input() -> Result<()> {
    let output = run_cli(&["samples/does_not_exist.csv"])?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    Ok(())
}
