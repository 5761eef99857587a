use crate::{errors::AppError, shapes::favorites::FavoritesSet};
use async_trait::async_trait;

#[async_trait]
pub trait FavoritesWriter {
    /// Replaces the stored set with `favorites`.
    async fn save(&self, favorites: &FavoritesSet) -> Result<(), AppError>;
}
