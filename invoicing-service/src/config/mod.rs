use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct InvoicingConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub storage: StorageConfig,
    pub defaults: InvoiceDefaults,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub data_dir: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    File,
}

/// Values applied when a new invoice omits them.
#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceDefaults {
    /// IVA percentage.
    pub tax_rate: f64,
    /// Days from issue to due date.
    pub payment_terms_days: i64,
}

impl Default for InvoiceDefaults {
    fn default() -> Self {
        Self {
            tax_rate: 21.0,
            payment_terms_days: 30,
        }
    }
}

impl InvoicingConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = common_config.is_production();
        let fallback = InvoiceDefaults::default();

        Ok(InvoicingConfig {
            common: common_config,
            storage: StorageConfig {
                backend: get_env("STORAGE_BACKEND", Some("file"), is_prod)?
                    .parse()
                    .map_err(|e: String| AppError::ConfigError(anyhow::anyhow!(e)))?,
                data_dir: get_env("DATA_DIR", Some("data"), is_prod)?,
            },
            defaults: InvoiceDefaults {
                tax_rate: parse_env("DEFAULT_TAX_RATE", fallback.tax_rate)?,
                payment_terms_days: parse_env("PAYMENT_TERMS_DAYS", fallback.payment_terms_days)?,
            },
        })
    }
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "file" => Ok(StorageBackend::File),
            _ => Err(format!("Invalid storage backend: {}", s)),
        }
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(val) => val.parse().map_err(|e: T::Err| {
            AppError::ConfigError(anyhow::anyhow!("Invalid value for {}: {}", key, e))
        }),
        Err(_) => Ok(default),
    }
}
