use crate::{
    errors::{AppError, IOError},
    providers::dataset_reader::DatasetReader,
    shapes::dataset::Dataset,
};
use async_trait::async_trait;
use serde_json::from_str;

const BUNDLED_DATASET: &str = include_str!("../../../data/players.json");

/// Reads the dataset compiled into the binary.
#[derive(Debug, Default)]
pub struct EmbeddedDatasetReader;

impl EmbeddedDatasetReader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DatasetReader for EmbeddedDatasetReader {
    async fn read(&self) -> Result<Dataset, AppError> {
        from_str(BUNDLED_DATASET).map_err(|e| AppError::IO(IOError::from(e)))
    }
}
