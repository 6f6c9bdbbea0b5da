use crate::models::Transaction;
use crate::types::TransactionId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AnalyzerError {
    #[error("Amount '{amount}' of transaction [{transaction_id}] is not a valid decimal")]
    InvalidAmount {
        transaction_id: TransactionId,
        amount: String
    },
    #[error("Date '{date}' of transaction [{transaction_id}] is not a valid calendar date")]
    InvalidDate {
        transaction_id: TransactionId,
        date: String
    },
    #[error("No transactions are available to aggregate")]
    EmptyCollection,
    #[error("Numeric overflow occurred while aggregating transaction [{transaction_id}]")]
    Overflow {
        transaction_id: TransactionId
    }
}

impl AnalyzerError {
    pub fn invalid_amount(tx: &Transaction) -> Self {
        Self::InvalidAmount {
            transaction_id: tx.transaction_id.clone(),
            amount: tx.transaction_amount.clone()
        }
    }

    pub fn invalid_date(tx: &Transaction) -> Self {
        Self::InvalidDate {
            transaction_id: tx.transaction_id.clone(),
            date: tx.transaction_date.clone()
        }
    }

    pub fn overflow(tx: &Transaction) -> Self {
        Self::Overflow {
            transaction_id: tx.transaction_id.clone()
        }
    }
}
