use crate::ingest::DatasetFormat;
use crate::models::Transaction;
use crate::storage::SharedAnalyzer;
use anyhow::Context;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{debug, error, info};

/// Streams a dataset file into a shared analyzer, preserving file order.
pub struct AsyncLoader {
    shared: SharedAnalyzer,
    backpressure: usize
}

impl AsyncLoader {
    /// Creates a new loader that appends into the provided analyzer.
    pub fn new(shared: SharedAnalyzer) -> Self {
        Self {
            shared,
            backpressure: 256
        }
    }

    /// Reads the file at `path` and appends every well-formed record.
    ///
    /// Returns the number of records appended. Malformed CSV rows are logged and skipped,
    /// while an unreadable file or an unparseable JSON document fails the whole run.
    pub async fn run(&self, path: &Path) -> anyhow::Result<usize> {
        let (sender, receiver) = mpsc::channel::<Transaction>(self.backpressure);
        let reader_handle = spawn_reader(path.to_path_buf(), sender);
        let appended = self.append_transactions(receiver).await;

        reader_handle.await.context("Dataset reader task failed")??;

        info!("Loaded {appended} transactions from {}", path.display());

        Ok(appended)
    }

    async fn append_transactions(&self, mut receiver: mpsc::Receiver<Transaction>) -> usize {
        let mut appended = 0;

        while let Some(transaction) = receiver.recv().await {
            self.shared.add_transaction(transaction).await;
            appended += 1;
        }

        appended
    }
}

fn spawn_reader(path: PathBuf, sender: mpsc::Sender<Transaction>) -> JoinHandle<anyhow::Result<()>> {
    spawn_blocking(move || {
        let file = File::open(&path)
            .with_context(|| format!("Error opening dataset at path: {}", path.display()))?;

        let reader = BufReader::new(file);
        let format = DatasetFormat::from_path(&path);

        debug!("Reading {} as {format:?}", path.display());

        match format {
            DatasetFormat::Csv => read_csv(reader, &sender),
            DatasetFormat::Json => read_json(reader, &sender)
        }
    })
}

fn read_csv<R: Read>(reader: R, sender: &mpsc::Sender<Transaction>) -> anyhow::Result<()> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    for result in reader.deserialize::<Transaction>() {
        match result {
            Ok(transaction) => {
                if sender.blocking_send(transaction).is_err() {
                    break;
                }
            }
            Err(error) => {
                error!("CSV deserialization error: {error}");
            }
        }
    }

    Ok(())
}

fn read_json<R: Read>(reader: R, sender: &mpsc::Sender<Transaction>) -> anyhow::Result<()> {
    let transactions: Vec<Transaction> = serde_json::from_reader(reader)
        .context("Error parsing JSON dataset")?;

    for transaction in transactions {
        if sender.blocking_send(transaction).is_err() {
            break;
        }
    }

    Ok(())
}
