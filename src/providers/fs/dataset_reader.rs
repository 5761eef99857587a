use crate::{
    errors::{AppError, IOError},
    providers::dataset_reader::DatasetReader,
    shapes::dataset::Dataset,
};
use async_trait::async_trait;
use serde_json::from_str;
use std::path::{Path, PathBuf};
use tokio::fs::read_to_string;

/// Reads a dataset document from disk, for catalogs other than the bundled one.
pub struct FileSystemDatasetReader(PathBuf);

impl FileSystemDatasetReader {
    pub fn new(path: &Path) -> Self {
        Self(path.to_path_buf())
    }
}

#[async_trait]
impl DatasetReader for FileSystemDatasetReader {
    async fn read(&self) -> Result<Dataset, AppError> {
        let content = read_to_string(&self.0)
            .await
            .map_err(|e| AppError::IO(IOError::from(e)))?;
        from_str(&content).map_err(|e| AppError::IO(IOError::from(e)))
    }
}
