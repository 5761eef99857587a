use crate::{
    errors::{AppError, IOError},
    providers::favorites_writer::FavoritesWriter,
    shapes::favorites::FavoritesSet,
};
use async_trait::async_trait;
use serde_json::to_string;
use std::path::{Path, PathBuf};
use tokio::fs::{create_dir_all, write};

pub struct FileSystemFavoritesWriter(PathBuf);

impl FileSystemFavoritesWriter {
    pub fn new(path: &Path) -> Self {
        Self(path.to_path_buf())
    }
}

#[async_trait]
impl FavoritesWriter for FileSystemFavoritesWriter {
    async fn save(&self, favorites: &FavoritesSet) -> Result<(), AppError> {
        let contents = to_string(favorites).map_err(|e| AppError::IO(IOError::from(e)))?;
        if let Some(parent) = self.0.parent() {
            create_dir_all(parent)
                .await
                .map_err(|e| AppError::IO(IOError::from(e)))?;
        }
        write(&self.0, contents)
            .await
            .map_err(|e| AppError::IO(IOError::from(e)))
    }
}
