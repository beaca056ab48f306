use crate::domain::model::{Item, LoadResponse, RowInput};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only object source the CSV is fetched from.
pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

/// Destination key-value table. Writes overwrite an existing item with the same key.
pub trait CustomerTable: Send + Sync {
    fn put_item(
        &self,
        table_name: &str,
        item: &Item,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Every lookup happens at call time and fails with `MissingConfig` when absent.
pub trait ConfigProvider: Send + Sync {
    fn region(&self) -> Result<String>;
    fn bucket(&self) -> Result<String>;
    fn table_name(&self) -> Result<String>;
    fn csv_file_name(&self) -> Result<String>;
    fn log_level(&self) -> Option<String> {
        None
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<RowInput>;
    async fn load(&self, input: RowInput) -> Result<LoadResponse>;
}
