use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use super::dataset::{Dataset, Record};
use super::traits::{DataProvider, RecordProvider};

/// Reads records from a JSON document shaped like [`Dataset`].
/// The file is read once, on first use.
pub struct JsonFileProvider {
    path: PathBuf,
    label: String,
    dataset: OnceCell<Dataset>,
}

impl JsonFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = path.display().to_string();
        Self {
            path,
            label,
            dataset: OnceCell::new(),
        }
    }

    async fn dataset(&self) -> Result<&Dataset> {
        self.dataset
            .get_or_try_init(|| async {
                info!("Reading dashboard data from {}", self.path.display());
                let raw = tokio::fs::read_to_string(&self.path)
                    .await
                    .with_context(|| format!("Failed to read data file {}", self.path.display()))?;
                debug!("Read {} bytes", raw.len());
                serde_json::from_str::<Dataset>(&raw)
                    .with_context(|| format!("Failed to parse data file {}", self.path.display()))
            })
            .await
    }
}

#[async_trait]
impl<T: Record> RecordProvider<T> for JsonFileProvider {
    async fn list(&self) -> Result<Vec<T>> {
        Ok(T::select(self.dataset().await?).to_vec())
    }
}

impl DataProvider for JsonFileProvider {
    fn source_name(&self) -> &str {
        &self.label
    }
}
