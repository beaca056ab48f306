use crate::utils::error::{LoaderError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings file for local runs.
///
/// ```toml
/// [source]
/// bucket = "customer-bucket"
/// key = "customer_info.csv"
///
/// [destination]
/// table = "customer-table"
/// region = "${AWS_REGION}"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoaderFile {
    #[serde(default)]
    pub source: SourceSection,
    #[serde(default)]
    pub destination: DestinationSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceSection {
    pub bucket: Option<String>,
    pub key: Option<String>,
    pub input_dir: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DestinationSection {
    pub table: Option<String>,
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
}

impl LoaderFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LoaderError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Expands `${VAR}` from the environment; unknown names stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LoaderError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}
