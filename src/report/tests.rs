use super::write_report;
use crate::analyzer::TransactionAnalyzer;
use crate::models::Transaction;
use crate::samples::sample_transactions;
use anyhow::Result;

fn render(analyzer: &TransactionAnalyzer) -> Result<String> {
    let mut output = Vec::new();
    write_report(analyzer, &mut output)?;
    Ok(String::from_utf8(output)?)
}

#[test]
fn test_report_covers_every_query_for_sample_dataset() -> Result<()> {
    let report = render(&TransactionAnalyzer::new(sample_transactions()))?;
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines.len(), 19);
    assert!(lines[0].starts_with(r#"all_transactions: [{"transaction_id":"1","#));
    assert_eq!(lines[1], r#"unique_transaction_types: ["debit","credit"]"#);
    assert_eq!(lines[2], "total_amount: 150");
    assert_eq!(lines[3], "total_amount_by_date(2019-1-1): 100");
    assert_eq!(lines[7], "average_transaction_amount: 75");
    assert_eq!(lines[9], "total_debit_amount: 100");
    assert_eq!(lines[10], "most_transactions_month: 1");
    assert_eq!(lines[11], "most_debit_transaction_month: 1");
    assert_eq!(lines[12], "most_transaction_types: equal");
    assert!(lines[14].starts_with(r#"transaction_by_id(1): {"transaction_id":"1","#));
    assert_eq!(lines[15], r#"transaction_descriptions: ["Payment for groceries","Refund for overcharge"]"#);
    assert_eq!(lines[16], "validation: ok");
    assert_eq!(lines[17], "exact_total_amount: 150.00");
    assert!(lines[18].starts_with("exact_average_transaction_amount: 75"));

    Ok(())
}

#[test]
fn test_report_renders_degenerate_results_for_empty_dataset() -> Result<()> {
    let report = render(&TransactionAnalyzer::default())?;

    assert!(report.contains("unique_transaction_types: []\n"));
    assert!(report.contains("total_amount: 0\n"));
    assert!(report.contains("average_transaction_amount: NaN\n"));
    assert!(report.contains("most_transactions_month: none\n"));
    assert!(report.contains("transaction_by_id(1): none\n"));
    assert!(report.contains("most_transaction_types: equal\n"));
    assert!(report.contains("exact_average_transaction_amount: error: No transactions are available to aggregate\n"));

    Ok(())
}

#[test]
fn test_report_surfaces_invalid_amounts() -> Result<()> {
    let analyzer = TransactionAnalyzer::new(vec![
        Transaction::new("5", "2019-01-01", "n/a", "debit", "Unknown", "SuperMart", "Visa")
    ]);
    let report = render(&analyzer)?;

    assert!(report.contains("total_amount: NaN\n"));
    assert!(report.contains("validation: Amount 'n/a' of transaction [5] is not a valid decimal\n"));
    assert!(report.contains("exact_total_amount: error: Amount 'n/a' of transaction [5] is not a valid decimal\n"));

    Ok(())
}
