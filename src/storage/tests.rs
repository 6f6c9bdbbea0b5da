use super::SharedAnalyzer;
use crate::analyzer::TransactionAnalyzer;
use crate::models::Transaction;
use crate::samples::sample_transactions;
use anyhow::Result;
use tokio::task::JoinSet;

fn create_transaction(transaction_id: usize) -> Transaction {
    Transaction::new(transaction_id.to_string(), "2019-03-01", "1.00", "debit", "Concurrent append", "SuperMart", "Visa")
}

#[tokio::test]
async fn test_shared_analyzer_exposes_wrapped_records() {
    let shared = SharedAnalyzer::new(TransactionAnalyzer::new(sample_transactions()));

    assert_eq!(shared.len().await, 2);
    assert_eq!(shared.read().await.calculate_total_amount(), 150.0);
}

#[tokio::test]
async fn test_clones_share_the_same_records() {
    let shared = SharedAnalyzer::default();
    let clone = shared.clone();

    clone.add_transaction(create_transaction(1)).await;

    assert_eq!(shared.len().await, 1);
    assert_eq!(shared.read().await.get_all_transactions()[0].transaction_id, "1");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_appends_are_all_retained() -> Result<()> {
    let shared = SharedAnalyzer::default();
    let mut tasks = JoinSet::new();

    for transaction_id in 0..64 {
        let shared = shared.clone();

        tasks.spawn(async move {
            shared.add_transaction(create_transaction(transaction_id)).await;
            let total = shared.read().await.calculate_total_amount();
            total
        });
    }

    while let Some(result) = tasks.join_next().await {
        assert!(result? >= 1.0);
    }

    let analyzer = shared.read().await;

    assert_eq!(analyzer.len(), 64);
    assert_eq!(analyzer.calculate_total_amount(), 64.0);
    assert_eq!(analyzer.find_most_debit_transaction_month(), Some(3));

    Ok(())
}
