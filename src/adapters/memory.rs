use crate::core::{CustomerTable, Item};
use crate::domain::model::PHONE_NUMBER;
use crate::utils::error::{LoaderError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Table stand-in keyed by (table name, PhoneNumber). Last write wins.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTable {
    items: Arc<Mutex<HashMap<(String, String), Item>>>,
}

impl InMemoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, table_name: &str, phone_number: &str) -> Option<Item> {
        let items = self.items.lock().await;
        items
            .get(&(table_name.to_string(), phone_number.to_string()))
            .cloned()
    }

    pub async fn len(&self) -> usize {
        self.items.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.lock().await.is_empty()
    }
}

impl CustomerTable for InMemoryTable {
    async fn put_item(&self, table_name: &str, item: &Item) -> Result<()> {
        let phone_number = item
            .get(PHONE_NUMBER)
            .ok_or_else(|| LoaderError::KeyNotFound {
                key: PHONE_NUMBER.to_string(),
            })?
            .as_str()
            .to_string();

        let mut items = self.items.lock().await;
        items.insert((table_name.to_string(), phone_number), item.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Attribute;

    fn item(phone: &str, name: &str) -> Item {
        let mut item = Item::new();
        item.insert("PhoneNumber".to_string(), Attribute::from(phone));
        item.insert("FirstName".to_string(), Attribute::from(name));
        item
    }

    #[tokio::test]
    async fn test_same_key_overwrites() {
        let table = InMemoryTable::new();
        table.put_item("customers", &item("1", "Huey")).await.unwrap();
        table.put_item("customers", &item("1", "Dewey")).await.unwrap();

        assert_eq!(table.len().await, 1);
        let stored = table.get("customers", "1").await.unwrap();
        assert_eq!(stored["FirstName"].as_str(), "Dewey");
    }

    #[tokio::test]
    async fn test_tables_are_separate() {
        let table = InMemoryTable::new();
        table.put_item("a", &item("1", "Huey")).await.unwrap();

        assert!(table.get("b", "1").await.is_none());
        assert!(!table.is_empty().await);
    }
}
