use crate::core::Storage;
use crate::utils::error::{LoaderError, Result};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::Client as S3Client;

#[derive(Debug, Clone)]
pub struct S3Storage {
    client: S3Client,
    bucket: String,
}

impl S3Storage {
    pub fn new(client: S3Client, bucket: String) -> Self {
        Self { client, bucket }
    }
}

impl Storage for S3Storage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        tracing::debug!("Reading s3://{}/{}", self.bucket, path);

        let resp = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(path)
            .send()
            .await
            .map_err(|e| LoaderError::StorageError {
                message: format!(
                    "Failed to read s3://{}/{}: {}",
                    self.bucket,
                    path,
                    DisplayErrorContext(&e)
                ),
            })?;

        let data = resp
            .body
            .collect()
            .await
            .map_err(|e| LoaderError::StorageError {
                message: format!("Failed to collect S3 data: {}", e),
            })?;

        Ok(data.into_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
    use httpmock::prelude::*;

    fn test_client(endpoint: &str) -> S3Client {
        let config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("eu-west-2"))
            .credentials_provider(Credentials::new("test", "test", None, None, "test"))
            .endpoint_url(endpoint)
            .force_path_style(true)
            .build();
        S3Client::from_conf(config)
    }

    #[tokio::test]
    async fn test_read_file_returns_object_body() {
        let server = MockServer::start();
        let object_mock = server.mock(|when, then| {
            when.method(GET).path("/customer-bucket/customer_info.csv");
            then.status(200)
                .header("Content-Type", "text/csv")
                .body("1234567891,Huey,Duck,Master,huey.duck@duckmail.com,SWIM-777\n");
        });

        let storage = S3Storage::new(
            test_client(&server.base_url()),
            "customer-bucket".to_string(),
        );
        let data = storage.read_file("customer_info.csv").await.unwrap();

        object_mock.assert();
        assert_eq!(
            String::from_utf8(data).unwrap(),
            "1234567891,Huey,Duck,Master,huey.duck@duckmail.com,SWIM-777\n"
        );
    }

    #[tokio::test]
    async fn test_read_missing_object_is_storage_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/customer-bucket/missing.csv");
            then.status(404)
                .header("Content-Type", "application/xml")
                .body(
                    r#"<?xml version="1.0" encoding="UTF-8"?><Error><Code>NoSuchKey</Code><Message>The specified key does not exist.</Message></Error>"#,
                );
        });

        let storage = S3Storage::new(
            test_client(&server.base_url()),
            "customer-bucket".to_string(),
        );
        let err = storage.read_file("missing.csv").await.unwrap_err();

        assert!(matches!(err, LoaderError::StorageError { .. }));
        assert!(err.to_string().contains("missing.csv"));
    }
}
