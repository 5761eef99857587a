use crate::{errors::AppError, shapes::favorites::FavoritesSet};
use async_trait::async_trait;

#[async_trait]
pub trait FavoritesReader {
    async fn load(&self) -> Result<FavoritesSet, AppError>;
}
