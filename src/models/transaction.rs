use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AnalyzerError;
use crate::types::{parse_amount_lossy, parse_amount_strict, parse_date, TransactionId};

/// A single financial record as it arrives from the dataset.
///
/// Every field is kept as text. The amount and the date are only interpreted when a
/// query needs them, so a record with a malformed amount is still stored and listed.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Caller supplied identifier, not checked for uniqueness.
    pub transaction_id: TransactionId,
    /// Calendar date, usually `YYYY-MM-DD`.
    pub transaction_date: String,
    /// Decimal amount in textual form.
    pub transaction_amount: String,
    /// Free-form category such as `debit` or `credit`.
    pub transaction_type: String,
    pub transaction_description: String,
    pub merchant_name: String,
    pub card_type: String
}

impl Transaction {
    pub fn new(
        transaction_id: impl Into<TransactionId>,
        transaction_date: impl Into<String>,
        transaction_amount: impl Into<String>,
        transaction_type: impl Into<String>,
        transaction_description: impl Into<String>,
        merchant_name: impl Into<String>,
        card_type: impl Into<String>
    ) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            transaction_date: transaction_date.into(),
            transaction_amount: transaction_amount.into(),
            transaction_type: transaction_type.into(),
            transaction_description: transaction_description.into(),
            merchant_name: merchant_name.into(),
            card_type: card_type.into()
        }
    }

    /// Amount as a float, `NaN` when the text has no numeric prefix.
    pub fn amount(&self) -> f64 {
        parse_amount_lossy(&self.transaction_amount)
    }

    pub fn strict_amount(&self) -> Result<Decimal, AnalyzerError> {
        parse_amount_strict(&self.transaction_amount)
            .map_err(|_| AnalyzerError::invalid_amount(self))
    }

    /// Parsed date, `None` when the text is not a recognizable date.
    pub fn date(&self) -> Option<NaiveDateTime> {
        parse_date(&self.transaction_date).ok()
    }

    pub fn strict_date(&self) -> Result<NaiveDateTime, AnalyzerError> {
        parse_date(&self.transaction_date)
            .map_err(|_| AnalyzerError::invalid_date(self))
    }

    /// Serializes the record as a single line of JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<&Transaction> for Transaction {
    fn from(transaction: &Transaction) -> Self {
        transaction.clone()
    }
}
