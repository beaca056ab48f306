pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{DynamoDbTable, InMemoryTable, LocalStorage, S3Storage};
#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{EnvConfig, LoaderFile};

pub use core::{etl::EtlEngine, pipeline::CustomerPipeline};
pub use domain::model::LoadResponse;
pub use utils::error::{LoaderError, Result};
