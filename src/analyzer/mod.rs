mod transaction_analyzer;

pub use transaction_analyzer::TransactionAnalyzer;
