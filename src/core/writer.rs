use crate::domain::model::Item;
use crate::domain::ports::CustomerTable;
use crate::utils::error::Result;

/// Persists one validated item. Store errors are returned untouched.
pub async fn put_item_to_table<T: CustomerTable>(
    table: &T,
    table_name: &str,
    item: &Item,
) -> Result<()> {
    tracing::debug!(table = table_name, ?item, "Putting item");
    table.put_item(table_name, item).await
}
