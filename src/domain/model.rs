use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const PHONE_NUMBER: &str = "PhoneNumber";

/// Item keys in source column order.
pub const ITEM_KEYS: [&str; 6] = [
    PHONE_NUMBER,
    "FirstName",
    "LastName",
    "Greeting",
    "Email",
    "PostCode",
];

/// A typed scalar in the key-value store's attribute convention, `{"S": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attribute {
    S(String),
}

impl Attribute {
    pub fn as_str(&self) -> &str {
        match self {
            Attribute::S(value) => value,
        }
    }
}

impl From<&str> for Attribute {
    fn from(value: &str) -> Self {
        Attribute::S(value.to_string())
    }
}

pub type Item = BTreeMap<String, Attribute>;

/// One source line before it becomes an [`Item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawRow {
    Fields(Vec<String>),
    Mapping(BTreeMap<String, String>),
}

impl From<Vec<String>> for RawRow {
    fn from(fields: Vec<String>) -> Self {
        RawRow::Fields(fields)
    }
}

impl From<&[&str]> for RawRow {
    fn from(fields: &[&str]) -> Self {
        RawRow::Fields(fields.iter().map(|f| f.to_string()).collect())
    }
}

impl From<BTreeMap<String, String>> for RawRow {
    fn from(mapping: BTreeMap<String, String>) -> Self {
        RawRow::Mapping(mapping)
    }
}

/// Decoded source lines, parsed one CSV record per line as they are iterated.
#[derive(Debug, Clone)]
pub struct CsvRows {
    pub(crate) lines: std::vec::IntoIter<String>,
}

impl CsvRows {
    pub fn new(lines: Vec<String>) -> Self {
        Self {
            lines: lines.into_iter(),
        }
    }
}

/// What the orchestrator is handed to iterate.
#[derive(Debug, Clone)]
pub enum RowInput {
    /// Rows behind a CSV parser over the fetched object.
    Csv(CsvRows),
    /// Text that never went through a CSV parser.
    Unparsed(String),
}

/// The `{statusCode, body}` mapping handed back to the function runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadResponse {
    pub status_code: u16,
    pub body: String,
}

impl LoadResponse {
    pub const CREATED: u16 = 201;
    pub const SERVER_ERROR: u16 = 500;

    pub fn created() -> Self {
        Self::with_status(Self::CREATED, "Customers created")
    }

    pub fn server_error() -> Self {
        Self::with_status(Self::SERVER_ERROR, "Server error")
    }

    fn with_status(status_code: u16, status: &str) -> Self {
        Self {
            status_code,
            body: serde_json::json!({ "status": status }).to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == Self::CREATED
    }
}
