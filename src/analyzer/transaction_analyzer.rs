use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

use chrono::{Datelike, NaiveDateTime};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::models::{AnalyzerError, Transaction, TypeBalance, CREDIT, DEBIT};
use crate::types::parse_date;

/// In-memory query layer over an ordered list of transactions.
///
/// Records keep their insertion order and are never reordered or deduplicated.
/// Amounts and dates are parsed from their textual form each time a query needs them.
#[derive(Debug, Clone, Default)]
pub struct TransactionAnalyzer {
    transactions: Vec<Transaction>
}

impl TransactionAnalyzer {
    /// Builds an analyzer holding its own copy of every input record, in input order.
    pub fn new<I, T>(transactions: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Transaction>
    {
        let transactions: Vec<Transaction> = transactions.into_iter().map(Into::into).collect();

        debug!("Analyzer created with {} transactions", transactions.len());

        Self { transactions }
    }

    pub fn add_transaction(&mut self, transaction: Transaction) {
        debug!("Transaction [{}] appended at position {}", transaction.transaction_id, self.transactions.len());
        self.transactions.push(transaction);
    }

    pub fn get_all_transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Distinct transaction types, each listed once in order of first appearance.
    pub fn get_unique_transaction_types(&self) -> Vec<&str> {
        let mut seen = HashSet::new();

        self.transactions.iter()
            .map(|transaction| transaction.transaction_type.as_str())
            .filter(|transaction_type| seen.insert(*transaction_type))
            .collect()
    }

    /// Sum of all amounts. A single unparseable amount turns the result into `NaN`.
    pub fn calculate_total_amount(&self) -> f64 {
        sum_amounts(self.transactions.iter())
    }

    /// Sum of amounts whose date matches every provided component.
    ///
    /// Omitted components match any value. `month` is 1-based. Records with an
    /// unparseable date only count when no component is provided at all.
    pub fn calculate_total_amount_by_date(&self, year: Option<i32>, month: Option<u32>, day: Option<u32>) -> f64 {
        let unconstrained = year.is_none() && month.is_none() && day.is_none();

        let matching = self.transactions.iter().filter(|transaction| {
            if unconstrained {
                return true;
            }

            let Some(date) = transaction.date() else {
                return false;
            };

            year.is_none_or(|year| date.year() == year)
                && month.is_none_or(|month| date.month() == month)
                && day.is_none_or(|day| date.day() == day)
        });

        sum_amounts(matching)
    }

    pub fn get_transactions_by_type(&self, transaction_type: &str) -> Vec<&Transaction> {
        self.transactions.iter()
            .filter(|transaction| transaction.transaction_type == transaction_type)
            .collect()
    }

    /// Transactions dated within `[start_date, end_date]`, both bounds inclusive.
    pub fn get_transactions_in_date_range(&self, start_date: &str, end_date: &str) -> Vec<&Transaction> {
        let (Some(start), Some(end)) = (parse_bound(start_date), parse_bound(end_date)) else {
            return Vec::new();
        };

        self.filter_by_date(|date| date >= start && date <= end)
    }

    pub fn get_transactions_by_merchant(&self, merchant_name: &str) -> Vec<&Transaction> {
        self.transactions.iter()
            .filter(|transaction| transaction.merchant_name == merchant_name)
            .collect()
    }

    /// Mean amount. With no transactions this is `0 / 0`, i.e. `NaN`.
    pub fn calculate_average_transaction_amount(&self) -> f64 {
        self.calculate_total_amount() / self.transactions.len() as f64
    }

    /// Transactions whose amount lies within `[min_amount, max_amount]`.
    pub fn get_transactions_by_amount_range(&self, min_amount: f64, max_amount: f64) -> Vec<&Transaction> {
        self.transactions.iter()
            .filter(|transaction| {
                let amount = transaction.amount();
                amount >= min_amount && amount <= max_amount
            })
            .collect()
    }

    pub fn calculate_total_debit_amount(&self) -> f64 {
        sum_amounts(self.get_transactions_by_type(DEBIT).into_iter())
    }

    /// Month (1-12) holding the most transactions across all years.
    pub fn find_most_transactions_month(&self) -> Option<u32> {
        most_frequent_month(self.transactions.iter())
    }

    pub fn find_most_debit_transaction_month(&self) -> Option<u32> {
        most_frequent_month(self.get_transactions_by_type(DEBIT).into_iter())
    }

    /// Compares debit and credit counts. Other transaction types are ignored.
    pub fn most_transaction_types(&self) -> TypeBalance {
        let debit_count = self.get_transactions_by_type(DEBIT).len();
        let credit_count = self.get_transactions_by_type(CREDIT).len();

        match debit_count.cmp(&credit_count) {
            Ordering::Greater => TypeBalance::Debit,
            Ordering::Less => TypeBalance::Credit,
            Ordering::Equal => TypeBalance::Equal
        }
    }

    /// Transactions dated strictly before `date`.
    pub fn get_transactions_before_date(&self, date: &str) -> Vec<&Transaction> {
        let Some(bound) = parse_bound(date) else {
            return Vec::new();
        };

        self.filter_by_date(|date| date < bound)
    }

    /// First transaction carrying `transaction_id`.
    pub fn find_transaction_by_id(&self, transaction_id: &str) -> Option<&Transaction> {
        self.transactions.iter()
            .find(|transaction| transaction.transaction_id == transaction_id)
    }

    pub fn map_transaction_descriptions(&self) -> Vec<&str> {
        self.transactions.iter()
            .map(|transaction| transaction.transaction_description.as_str())
            .collect()
    }

    /// Checks every record for a strictly valid amount and date.
    ///
    /// # Errors
    /// Returns the `AnalyzerError` of the first offending record.
    pub fn validate(&self) -> Result<(), AnalyzerError> {
        for transaction in &self.transactions {
            transaction.strict_amount()?;
            transaction.strict_date()?;
        }

        Ok(())
    }

    /// Exact decimal total that fails instead of producing `NaN`.
    ///
    /// # Errors
    /// Returns `AnalyzerError::InvalidAmount` for the first amount that is not a
    /// decimal, or `AnalyzerError::Overflow` when the total exceeds the decimal range.
    pub fn try_calculate_total_amount(&self) -> Result<Decimal, AnalyzerError> {
        self.transactions.iter().try_fold(Decimal::ZERO, |total, transaction| {
            total.checked_add(transaction.strict_amount()?)
                .ok_or_else(|| AnalyzerError::overflow(transaction))
        })
    }

    /// Exact decimal mean that fails on an empty analyzer instead of producing `NaN`.
    pub fn try_calculate_average_transaction_amount(&self) -> Result<Decimal, AnalyzerError> {
        if self.is_empty() {
            return Err(AnalyzerError::EmptyCollection);
        }

        let total = self.try_calculate_total_amount()?;

        Ok(total / Decimal::from(self.len()))
    }

    fn filter_by_date<F>(&self, predicate: F) -> Vec<&Transaction>
    where
        F: Fn(NaiveDateTime) -> bool
    {
        self.transactions.iter()
            .filter(|transaction| transaction.date().is_some_and(&predicate))
            .collect()
    }
}

fn sum_amounts<'a>(transactions: impl Iterator<Item = &'a Transaction>) -> f64 {
    transactions.fold(0.0, |total, transaction| total + transaction.amount())
}

fn parse_bound(value: &str) -> Option<NaiveDateTime> {
    match parse_date(value) {
        Ok(date) => Some(date),
        Err(error) => {
            warn!("Date bound ignored, no transactions can match: {error}");
            None
        }
    }
}

//NOTE: Months are counted in ascending order so a tie resolves to the lowest month number
fn most_frequent_month<'a>(transactions: impl Iterator<Item = &'a Transaction>) -> Option<u32> {
    let mut months = BTreeMap::<u32, usize>::new();

    for transaction in transactions {
        match transaction.date() {
            Some(date) => *months.entry(date.month()).or_default() += 1,
            None => debug!("Transaction [{}] skipped from month counts, unparseable date", transaction.transaction_id)
        }
    }

    let mut most_month = None;
    let mut max_transactions = 0;

    for (month, count) in months {
        if count > max_transactions {
            most_month = Some(month);
            max_transactions = count;
        }
    }

    most_month
}
