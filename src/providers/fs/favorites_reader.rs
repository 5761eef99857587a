use crate::{
    errors::{AppError, IOError},
    providers::favorites_reader::FavoritesReader,
    shapes::favorites::FavoritesSet,
};
use async_trait::async_trait;
use serde_json::from_str;
use std::path::{Path, PathBuf};
use tokio::fs::read_to_string;

pub struct FileSystemFavoritesReader(PathBuf);

impl FileSystemFavoritesReader {
    pub fn new(path: &Path) -> Self {
        Self(path.to_path_buf())
    }
}

#[async_trait]
impl FavoritesReader for FileSystemFavoritesReader {
    async fn load(&self) -> Result<FavoritesSet, AppError> {
        if !self.0.exists() {
            Ok(FavoritesSet::default())
        } else {
            let contents = read_to_string(&self.0)
                .await
                .map_err(|e| AppError::IO(IOError::from(e)))?;
            let ids = from_str(&contents).map_err(|e| AppError::IO(IOError::from(e)))?;
            Ok(FavoritesSet::new(ids))
        }
    }
}
