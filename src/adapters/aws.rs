use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::Client as S3Client;

/// Shared SDK config. `endpoint_url` points both clients at a local stand-in.
pub async fn sdk_config(region: &str, endpoint_url: Option<&str>) -> SdkConfig {
    let mut loader =
        aws_config::defaults(BehaviorVersion::latest()).region(Region::new(region.to_string()));
    if let Some(endpoint_url) = endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }
    loader.load().await
}

/// S3 client; custom endpoints get path-style addressing.
pub async fn s3_client(region: &str, endpoint_url: Option<&str>) -> S3Client {
    let config = sdk_config(region, endpoint_url).await;
    let s3_config = aws_sdk_s3::config::Builder::from(&config)
        .force_path_style(endpoint_url.is_some())
        .build();
    S3Client::from_conf(s3_config)
}

pub async fn dynamodb_client(region: &str, endpoint_url: Option<&str>) -> DynamoDbClient {
    let config = sdk_config(region, endpoint_url).await;
    DynamoDbClient::new(&config)
}
