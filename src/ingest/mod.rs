mod async_loader;

use std::path::Path;

pub use async_loader::AsyncLoader;

/// On-disk layout of a dataset, chosen by file extension.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DatasetFormat {
    Csv,
    Json
}

impl DatasetFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some(extension) if extension.eq_ignore_ascii_case("json") => DatasetFormat::Json,
            _ => DatasetFormat::Csv
        }
    }
}
