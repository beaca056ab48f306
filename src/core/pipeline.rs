use crate::core::extract::{csv_reader, extract_item_from_row};
use crate::core::validate::validate_item;
use crate::core::writer::put_item_to_table;
use crate::core::{
    ConfigProvider, CustomerTable, CsvRows, LoadResponse, Pipeline, RowInput, Storage,
};
use crate::utils::error::{LoaderError, Result};

/// Fetches the customer CSV and writes each row into the destination table.
pub struct CustomerPipeline<S: Storage, T: CustomerTable, C: ConfigProvider> {
    storage: S,
    table: T,
    config: C,
}

impl<S: Storage, T: CustomerTable, C: ConfigProvider> CustomerPipeline<S, T, C> {
    pub fn new(storage: S, table: T, config: C) -> Self {
        Self {
            storage,
            table,
            config,
        }
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    /// Runs every row through extract, validate and write. Stops at the first error.
    async fn write_rows(&self, rows: CsvRows) -> Result<usize> {
        let mut written = 0;

        for row in rows {
            let row = row?;
            let table_name = self.config.table_name()?;

            let item = extract_item_from_row(&row)?;
            validate_item(&item)?;
            put_item_to_table(&self.table, &table_name, &item).await?;

            written += 1;
        }

        Ok(written)
    }
}

#[async_trait::async_trait]
impl<S: Storage, T: CustomerTable, C: ConfigProvider> Pipeline for CustomerPipeline<S, T, C> {
    async fn extract(&self) -> Result<RowInput> {
        let file_name = self.config.csv_file_name()?;

        tracing::debug!("Fetching source object: {}", file_name);
        let data = self.storage.read_file(&file_name).await?;
        tracing::debug!("Fetched {} bytes", data.len());

        let text = String::from_utf8(data)?;
        Ok(csv_reader(&text))
    }

    async fn load(&self, input: RowInput) -> Result<LoadResponse> {
        let RowInput::Csv(rows) = input else {
            return Err(LoaderError::WrongParameterType);
        };

        match self.write_rows(rows).await {
            Ok(written) => {
                tracing::info!("Wrote {} customer items", written);
                Ok(LoadResponse::created())
            }
            Err(e) => {
                tracing::error!(category = ?e.category(), "Customer load failed: {}", e);
                Ok(LoadResponse::server_error())
            }
        }
    }
}
