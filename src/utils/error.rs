use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Missing configuration: {name}")]
    MissingConfig { name: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("please provide proper length of list with proper values")]
    RowLength { found: usize },

    #[error("list index out of range")]
    IndexOutOfRange { found: usize },

    #[error("please pass list type of object")]
    WrongRowShape,

    #[error("{key} not found in item")]
    KeyNotFound { key: String },

    #[error("Item does not have correct keys")]
    SchemaMismatch {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },

    #[error("csv reader type of object is not passed")]
    WrongParameterType,

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Source file is not valid UTF-8: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("Object store error: {message}")]
    StorageError { message: String },

    #[error("Table write error: {message}")]
    TableError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Row,
    Schema,
    Input,
    External,
}

impl LoaderError {
    pub fn missing_config(name: impl Into<String>) -> Self {
        LoaderError::MissingConfig { name: name.into() }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            LoaderError::MissingConfig { .. }
            | LoaderError::InvalidConfigValueError { .. }
            | LoaderError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            LoaderError::RowLength { .. }
            | LoaderError::IndexOutOfRange { .. }
            | LoaderError::WrongRowShape
            | LoaderError::CsvError(_) => ErrorCategory::Row,
            LoaderError::KeyNotFound { .. } | LoaderError::SchemaMismatch { .. } => {
                ErrorCategory::Schema
            }
            LoaderError::WrongParameterType | LoaderError::Utf8Error(_) => ErrorCategory::Input,
            LoaderError::IoError(_)
            | LoaderError::StorageError { .. }
            | LoaderError::TableError { .. } => ErrorCategory::External,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Set REGION, S3_BUCKET, CUSTOMER_TABLE and CSV_FILE_NAME (or the matching flags)"
            }
            ErrorCategory::Row => "Every line must hold exactly six comma-separated fields",
            ErrorCategory::Schema => {
                "Items need PhoneNumber, FirstName, LastName, Greeting, Email and PostCode"
            }
            ErrorCategory::Input => {
                "Save the source as UTF-8 CSV and load it through the CSV reader"
            }
            ErrorCategory::External => "Check the bucket, object key, table and credentials",
        }
    }
}

pub type Result<T> = std::result::Result<T, LoaderError>;
