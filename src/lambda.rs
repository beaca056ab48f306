use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_s3::Client as S3Client;
use customer_loader::adapters::aws;
use customer_loader::core::ConfigProvider;
use customer_loader::utils::logger;
use customer_loader::{
    CustomerPipeline, DynamoDbTable, EnvConfig, EtlEngine, LoadResponse, S3Storage,
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;

/// The event is opaque; everything the run needs comes from the environment.
async fn function_handler(
    s3_client: &S3Client,
    dynamodb_client: &DynamoDbClient,
    config: &EnvConfig,
    event: LambdaEvent<Value>,
) -> Result<LoadResponse, Error> {
    tracing::info!(request_id = %event.context.request_id, "Starting customer loader");

    let storage = S3Storage::new(s3_client.clone(), config.bucket()?);
    let table = DynamoDbTable::new(dynamodb_client.clone());
    let pipeline = CustomerPipeline::new(storage, table, config.clone());

    let response = EtlEngine::new(pipeline).run().await?;
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = EnvConfig::from_env();
    logger::init_lambda_logger(config.log_level().as_deref());

    // Clients live for the whole execution environment and are reused across invocations.
    let region = config.region()?;
    let s3_client = aws::s3_client(&region, None).await;
    let dynamodb_client = aws::dynamodb_client(&region, None).await;

    run(service_fn(|event: LambdaEvent<Value>| {
        function_handler(&s3_client, &dynamodb_client, &config, event)
    }))
    .await
}
