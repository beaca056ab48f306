use crate::domain::model::{Item, ITEM_KEYS, PHONE_NUMBER};
use crate::utils::error::{LoaderError, Result};
use std::collections::BTreeSet;

/// Checks the key set only. Values, including empty strings, are not inspected.
pub fn validate_item(item: &Item) -> Result<()> {
    if !item.contains_key(PHONE_NUMBER) {
        return Err(LoaderError::KeyNotFound {
            key: PHONE_NUMBER.to_string(),
        });
    }

    let expected: BTreeSet<&str> = ITEM_KEYS.into_iter().collect();
    let actual: BTreeSet<&str> = item.keys().map(String::as_str).collect();

    if actual != expected {
        return Err(LoaderError::SchemaMismatch {
            missing: expected
                .difference(&actual)
                .map(|k| k.to_string())
                .collect(),
            unexpected: actual
                .difference(&expected)
                .map(|k| k.to_string())
                .collect(),
        });
    }

    Ok(())
}
