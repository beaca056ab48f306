use crate::config::toml_config::LoaderFile;
use crate::core::ConfigProvider;
use crate::utils::error::{LoaderError, Result};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "customer-loader")]
#[command(about = "Load customer records from a CSV file into a DynamoDB table")]
pub struct CliConfig {
    #[arg(long, help = "TOML file with [source] and [destination] sections")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "AWS region for the S3 and DynamoDB clients")]
    pub region: Option<String>,

    #[arg(long, help = "Source bucket")]
    pub bucket: Option<String>,

    #[arg(long, help = "Object key (or file name under --input-dir) of the CSV")]
    pub key: Option<String>,

    #[arg(long, help = "Read the CSV from this directory instead of S3")]
    pub input_dir: Option<String>,

    #[arg(long, help = "Destination DynamoDB table")]
    pub table: Option<String>,

    #[arg(long, help = "Custom endpoint, e.g. DynamoDB Local or LocalStack")]
    pub endpoint_url: Option<String>,

    #[arg(long, help = "Write into an in-memory table instead of DynamoDB")]
    pub dry_run: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Fills every unset flag from the settings file. Flags win.
    pub fn merge_file(mut self, file: LoaderFile) -> Self {
        self.bucket = self.bucket.or(file.source.bucket);
        self.key = self.key.or(file.source.key);
        self.input_dir = self.input_dir.or(file.source.input_dir);
        self.table = self.table.or(file.destination.table);
        self.region = self.region.or(file.destination.region);
        self.endpoint_url = self.endpoint_url.or(file.destination.endpoint_url);
        self
    }

    /// Only a dry run over a local directory can skip AWS entirely.
    pub fn needs_aws(&self) -> bool {
        !(self.dry_run && self.input_dir.is_some())
    }
}

fn required(value: &Option<String>, name: &str) -> Result<String> {
    value.clone().ok_or_else(|| LoaderError::missing_config(name))
}

impl ConfigProvider for CliConfig {
    fn region(&self) -> Result<String> {
        required(&self.region, "region")
    }

    fn bucket(&self) -> Result<String> {
        required(&self.bucket, "bucket")
    }

    fn table_name(&self) -> Result<String> {
        required(&self.table, "table")
    }

    fn csv_file_name(&self) -> Result<String> {
        required(&self.key, "key")
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("key", &self.csv_file_name()?)?;
        validation::validate_table_name("table", &self.table_name()?)?;

        match &self.input_dir {
            Some(dir) => validation::validate_path("input_dir", dir)?,
            None => validation::validate_s3_bucket_name("bucket", &self.bucket()?)?,
        }

        if self.needs_aws() {
            validation::validate_aws_region("region", &self.region()?)?;
        }

        if let Some(endpoint_url) = &self.endpoint_url {
            validation::validate_url("endpoint_url", endpoint_url)?;
        }

        tracing::debug!("CLI configuration validation passed");
        Ok(())
    }
}
