use crate::{errors::AppError, shapes::dataset::Dataset};
use async_trait::async_trait;

#[async_trait]
pub trait DatasetReader {
    async fn read(&self) -> Result<Dataset, AppError>;
}
