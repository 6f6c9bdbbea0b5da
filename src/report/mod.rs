#[cfg(test)]
mod tests;

use std::fmt::Display;
use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use tracing::warn;

use crate::analyzer::TransactionAnalyzer;
use crate::models::{Transaction, DEBIT};

const DEMO_MERCHANT: &str = "SuperMart";
const DEMO_TRANSACTION_ID: &str = "1";
const DEMO_RANGE_START: &str = "2019-01-01";
const DEMO_RANGE_END: &str = "2019-01-02";
const DEMO_BEFORE_DATE: &str = "2019-01-02";
const DEMO_YEAR: i32 = 2019;
const DEMO_MONTH: u32 = 1;
const DEMO_DAY: u32 = 1;
const DEMO_MIN_AMOUNT: f64 = 50.0;
const DEMO_MAX_AMOUNT: f64 = 100.0;

/// Runs every analyzer query once and writes one labelled line per result.
///
/// Record lists are rendered as JSON arrays, single records through `Transaction::to_json`
/// and missing values as `none`.
pub fn write_report<W: Write>(analyzer: &TransactionAnalyzer, output: &mut W) -> Result<()> {
    write_json(output, "all_transactions", analyzer.get_all_transactions())?;
    write_json(output, "unique_transaction_types", &analyzer.get_unique_transaction_types())?;
    write_value(output, "total_amount", analyzer.calculate_total_amount())?;
    write_value(
        output,
        &format!("total_amount_by_date({DEMO_YEAR}-{DEMO_MONTH}-{DEMO_DAY})"),
        analyzer.calculate_total_amount_by_date(Some(DEMO_YEAR), Some(DEMO_MONTH), Some(DEMO_DAY))
    )?;
    write_json(output, &format!("transactions_by_type({DEBIT})"), &analyzer.get_transactions_by_type(DEBIT))?;
    write_json(
        output,
        &format!("transactions_in_date_range({DEMO_RANGE_START},{DEMO_RANGE_END})"),
        &analyzer.get_transactions_in_date_range(DEMO_RANGE_START, DEMO_RANGE_END)
    )?;
    write_json(output, &format!("transactions_by_merchant({DEMO_MERCHANT})"), &analyzer.get_transactions_by_merchant(DEMO_MERCHANT))?;
    write_value(output, "average_transaction_amount", analyzer.calculate_average_transaction_amount())?;
    write_json(
        output,
        &format!("transactions_by_amount_range({DEMO_MIN_AMOUNT},{DEMO_MAX_AMOUNT})"),
        &analyzer.get_transactions_by_amount_range(DEMO_MIN_AMOUNT, DEMO_MAX_AMOUNT)
    )?;
    write_value(output, "total_debit_amount", analyzer.calculate_total_debit_amount())?;
    write_optional(output, "most_transactions_month", analyzer.find_most_transactions_month())?;
    write_optional(output, "most_debit_transaction_month", analyzer.find_most_debit_transaction_month())?;
    write_value(output, "most_transaction_types", analyzer.most_transaction_types())?;
    write_json(output, &format!("transactions_before_date({DEMO_BEFORE_DATE})"), &analyzer.get_transactions_before_date(DEMO_BEFORE_DATE))?;
    write_record(output, &format!("transaction_by_id({DEMO_TRANSACTION_ID})"), analyzer.find_transaction_by_id(DEMO_TRANSACTION_ID))?;
    write_json(output, "transaction_descriptions", &analyzer.map_transaction_descriptions())?;
    write_validation(analyzer, output)?;

    output.flush()?;

    Ok(())
}

fn write_validation<W: Write>(analyzer: &TransactionAnalyzer, output: &mut W) -> Result<()> {
    match analyzer.validate() {
        Ok(()) => write_value(output, "validation", "ok")?,
        Err(error) => {
            warn!("Dataset failed strict validation: {error}");
            write_value(output, "validation", error)?;
        }
    }

    write_exact(output, "exact_total_amount", analyzer.try_calculate_total_amount())?;
    write_exact(output, "exact_average_transaction_amount", analyzer.try_calculate_average_transaction_amount())
}

fn write_exact<W: Write, V: Display, E: Display>(output: &mut W, label: &str, value: Result<V, E>) -> Result<()> {
    match value {
        Ok(value) => write_value(output, label, value),
        Err(error) => write_value(output, label, format!("error: {error}"))
    }
}

fn write_value<W: Write, V: Display>(output: &mut W, label: &str, value: V) -> Result<()> {
    writeln!(output, "{label}: {value}")?;
    Ok(())
}

fn write_optional<W: Write, V: Display>(output: &mut W, label: &str, value: Option<V>) -> Result<()> {
    match value {
        Some(value) => write_value(output, label, value),
        None => write_value(output, label, "none")
    }
}

fn write_json<W: Write, V: Serialize + ?Sized>(output: &mut W, label: &str, value: &V) -> Result<()> {
    write_value(output, label, serde_json::to_string(value)?)
}

fn write_record<W: Write>(output: &mut W, label: &str, record: Option<&Transaction>) -> Result<()> {
    let rendered = record.map(Transaction::to_json).transpose()?;
    write_optional(output, label, rendered)
}
