use crate::analyzer::TransactionAnalyzer;
use crate::models::Transaction;
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard};

/// Cloneable handle that lets many tasks query one analyzer while appends are serialized.
#[derive(Clone, Default)]
pub struct SharedAnalyzer {
    inner: Arc<RwLock<TransactionAnalyzer>>
}

impl SharedAnalyzer {
    pub fn new(analyzer: TransactionAnalyzer) -> Self {
        Self {
            inner: Arc::new(RwLock::new(analyzer))
        }
    }

    pub async fn add_transaction(&self, transaction: Transaction) {
        self.inner.write().await.add_transaction(transaction);
    }

    /// Read access for running queries. Appends wait until the guard is dropped.
    pub async fn read(&self) -> RwLockReadGuard<'_, TransactionAnalyzer> {
        self.inner.read().await
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}
