use crate::core::{Attribute, CustomerTable, Item};
use crate::utils::error::{LoaderError, Result};
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct DynamoDbTable {
    client: DynamoDbClient,
}

impl DynamoDbTable {
    pub fn new(client: DynamoDbClient) -> Self {
        Self { client }
    }
}

fn to_attribute_values(item: &Item) -> HashMap<String, AttributeValue> {
    item.iter()
        .map(|(key, value)| {
            let value = match value {
                Attribute::S(s) => AttributeValue::S(s.clone()),
            };
            (key.clone(), value)
        })
        .collect()
}

impl CustomerTable for DynamoDbTable {
    async fn put_item(&self, table_name: &str, item: &Item) -> Result<()> {
        self.client
            .put_item()
            .table_name(table_name)
            .set_item(Some(to_attribute_values(item)))
            .send()
            .await
            .map_err(|e| LoaderError::TableError {
                message: format!(
                    "Failed to put item into {}: {}",
                    table_name,
                    DisplayErrorContext(&e)
                ),
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::extract::extract_item_from_row;
    use crate::core::RawRow;
    use aws_sdk_dynamodb::config::{BehaviorVersion, Credentials, Region};
    use httpmock::prelude::*;

    fn test_client(endpoint: &str) -> DynamoDbClient {
        let config = aws_sdk_dynamodb::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("eu-west-2"))
            .credentials_provider(Credentials::new("test", "test", None, None, "test"))
            .endpoint_url(endpoint)
            .build();
        DynamoDbClient::from_conf(config)
    }

    fn huey() -> Item {
        extract_item_from_row(&RawRow::from(
            &[
                "1234567891",
                "Huey",
                "Duck",
                "Master",
                "huey.duck@duckmail.com",
                "SWIM-777",
            ][..],
        ))
        .unwrap()
    }

    #[test]
    fn test_every_field_is_string_typed() {
        let values = to_attribute_values(&huey());
        assert_eq!(values.len(), 6);
        assert_eq!(
            values["PhoneNumber"],
            AttributeValue::S("1234567891".to_string())
        );
        assert!(values.values().all(|v| v.is_s()));
    }

    #[tokio::test]
    async fn test_put_item_sends_one_request() {
        let server = MockServer::start();
        let put_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/")
                .header("x-amz-target", "DynamoDB_20120810.PutItem")
                .json_body_partial(
                    r#"{"TableName":"customer-table","Item":{"PhoneNumber":{"S":"1234567891"},"PostCode":{"S":"SWIM-777"}}}"#,
                );
            then.status(200)
                .header("Content-Type", "application/x-amz-json-1.0")
                .body("{}");
        });

        let table = DynamoDbTable::new(test_client(&server.base_url()));
        table.put_item("customer-table", &huey()).await.unwrap();

        put_mock.assert_hits(1);
    }

    #[tokio::test]
    async fn test_put_item_missing_table_is_table_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/");
            then.status(400)
                .header("Content-Type", "application/x-amz-json-1.0")
                .body(
                    r#"{"__type":"com.amazonaws.dynamodb.v20120810#ResourceNotFoundException","message":"Requested resource not found"}"#,
                );
        });

        let table = DynamoDbTable::new(test_client(&server.base_url()));
        let err = table.put_item("missing-table", &huey()).await.unwrap_err();

        assert!(matches!(err, LoaderError::TableError { .. }));
        assert!(err.to_string().contains("missing-table"));
    }
}
