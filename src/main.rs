use clap::Parser;
use customer_loader::adapters::aws;
use customer_loader::core::{ConfigProvider, CustomerTable, Storage};
use customer_loader::utils::error::ErrorCategory;
use customer_loader::utils::{logger, validation::Validate};
use customer_loader::{
    CliConfig, CustomerPipeline, DynamoDbTable, EtlEngine, InMemoryTable, LoadResponse,
    LoaderFile, LocalStorage, S3Storage,
};

async fn load<S: Storage, T: CustomerTable>(
    storage: S,
    table: T,
    config: CliConfig,
) -> customer_loader::Result<LoadResponse> {
    EtlEngine::new(CustomerPipeline::new(storage, table, config))
        .run()
        .await
}

async fn s3_storage(config: &CliConfig) -> customer_loader::Result<S3Storage> {
    let client = aws::s3_client(&config.region()?, config.endpoint_url.as_deref()).await;
    Ok(S3Storage::new(client, config.bucket()?))
}

async fn dynamodb_table(config: &CliConfig) -> customer_loader::Result<DynamoDbTable> {
    let client = aws::dynamodb_client(&config.region()?, config.endpoint_url.as_deref()).await;
    Ok(DynamoDbTable::new(client))
}

async fn run(config: CliConfig) -> customer_loader::Result<LoadResponse> {
    let dry_run_table = InMemoryTable::new();

    let response = match (config.input_dir.clone(), config.dry_run) {
        (Some(dir), true) => load(LocalStorage::new(dir), dry_run_table.clone(), config).await?,
        (Some(dir), false) => {
            let table = dynamodb_table(&config).await?;
            load(LocalStorage::new(dir), table, config).await?
        }
        (None, true) => {
            let storage = s3_storage(&config).await?;
            load(storage, dry_run_table.clone(), config).await?
        }
        (None, false) => {
            let storage = s3_storage(&config).await?;
            let table = dynamodb_table(&config).await?;
            load(storage, table, config).await?
        }
    };

    if !dry_run_table.is_empty().await {
        tracing::info!("Dry run kept {} items in memory", dry_run_table.len().await);
    }

    Ok(response)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting customer-loader CLI");

    if let Some(path) = config.config.clone() {
        config = config.merge_file(LoaderFile::from_file(path)?);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    match run(config).await {
        Ok(response) => {
            println!("{}", serde_json::to_string(&response)?);
            if !response.is_success() {
                std::process::exit(2);
            }
        }
        Err(e) => {
            tracing::error!("Customer load failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.category() {
                ErrorCategory::Configuration => 1,
                ErrorCategory::Row | ErrorCategory::Schema | ErrorCategory::Input => 2,
                ErrorCategory::External => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
