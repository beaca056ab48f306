use crate::core::ConfigProvider;
use crate::utils::error::{LoaderError, Result};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

type Lookup = dyn Fn(&str) -> Option<String> + Send + Sync;

/// Environment-sourced settings, looked up on every call rather than cached.
#[derive(Clone)]
pub struct EnvConfig {
    lookup: Arc<Lookup>,
}

impl EnvConfig {
    pub const REGION: &'static str = "REGION";
    pub const S3_BUCKET: &'static str = "S3_BUCKET";
    pub const CUSTOMER_TABLE: &'static str = "CUSTOMER_TABLE";
    pub const CSV_FILE_NAME: &'static str = "CSV_FILE_NAME";
    pub const LOG_LEVEL: &'static str = "LOG_LEVEL";

    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            lookup: Arc::new(lookup),
        }
    }

    /// Fixed values instead of the process environment.
    pub fn from_map(values: HashMap<String, String>) -> Self {
        Self::from_lookup(move |name| values.get(name).cloned())
    }

    fn required(&self, name: &str) -> Result<String> {
        let value = (self.lookup)(name).ok_or_else(|| LoaderError::missing_config(name))?;
        tracing::debug!("{} -> {}", name, value);
        Ok(value)
    }
}

impl fmt::Debug for EnvConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvConfig").finish_non_exhaustive()
    }
}

impl ConfigProvider for EnvConfig {
    fn region(&self) -> Result<String> {
        self.required(Self::REGION)
    }

    fn bucket(&self) -> Result<String> {
        self.required(Self::S3_BUCKET)
    }

    fn table_name(&self) -> Result<String> {
        self.required(Self::CUSTOMER_TABLE)
    }

    fn csv_file_name(&self) -> Result<String> {
        self.required(Self::CSV_FILE_NAME)
    }

    fn log_level(&self) -> Option<String> {
        (self.lookup)(Self::LOG_LEVEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_env() -> HashMap<String, String> {
        [
            ("REGION", "eu-west-2"),
            ("S3_BUCKET", "m2-customer-bucket"),
            ("CUSTOMER_TABLE", "m2-customer-table"),
            ("CSV_FILE_NAME", "customer_info.csv"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    fn without(name: &str) -> EnvConfig {
        let mut env = full_env();
        env.remove(name);
        EnvConfig::from_map(env)
    }

    #[test]
    fn test_reads_every_setting() {
        let config = EnvConfig::from_map(full_env());

        assert_eq!(config.region().unwrap(), "eu-west-2");
        assert_eq!(config.bucket().unwrap(), "m2-customer-bucket");
        assert_eq!(config.table_name().unwrap(), "m2-customer-table");
        assert_eq!(config.csv_file_name().unwrap(), "customer_info.csv");
        assert_eq!(config.log_level(), None);
    }

    #[test]
    fn test_each_missing_setting_fails() {
        let checks: [(&str, fn(&EnvConfig) -> Result<String>); 4] = [
            ("REGION", |c| c.region()),
            ("S3_BUCKET", |c| c.bucket()),
            ("CUSTOMER_TABLE", |c| c.table_name()),
            ("CSV_FILE_NAME", |c| c.csv_file_name()),
        ];

        for (name, lookup) in checks {
            let err = lookup(&without(name)).unwrap_err();
            assert!(
                matches!(err, LoaderError::MissingConfig { name: ref missing } if missing == name),
                "{name} should be reported missing, got {err}"
            );
        }
    }

    #[test]
    fn test_lookup_happens_per_call() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let config = EnvConfig::from_lookup(move |_| {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            Some(format!("table-{n}"))
        });

        assert_eq!(config.table_name().unwrap(), "table-0");
        assert_eq!(config.table_name().unwrap(), "table-1");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
