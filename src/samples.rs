use crate::models::Transaction;

/// The two-record dataset used when no input file is given.
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new("1", "2019-01-01", "100.00", "debit", "Payment for groceries", "SuperMart", "Visa"),
        Transaction::new("2", "2019-01-02", "50.00", "credit", "Refund for overcharge", "RefundCo", "MasterCard"),
    ]
}
