// Adapters layer: concrete implementations of the domain ports.

pub mod aws;
pub mod dynamodb;
pub mod local;
pub mod memory;
pub mod s3;

pub use dynamodb::DynamoDbTable;
pub use local::LocalStorage;
pub use memory::InMemoryTable;
pub use s3::S3Storage;
