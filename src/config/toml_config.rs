use crate::core::{ConfigProvider, SortDirection, SortKey, DEFAULT_PAGE_SIZE};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub catalog: Option<CatalogConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub page_size: Option<usize>,
    pub default_sort: Option<String>,
    pub default_direction: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_source("source.endpoint", &self.source.endpoint)?;

        if let Some(timeout) = self.source.timeout_seconds {
            crate::utils::validation::validate_range("source.timeout_seconds", timeout, 1, 300)?;
        }

        if let Some(page_size) = self.catalog.as_ref().and_then(|c| c.page_size) {
            crate::utils::validation::validate_positive_number("catalog.page_size", page_size, 1)?;
        }

        self.default_sort()?;
        self.default_direction()?;
        Ok(())
    }

    pub fn default_sort(&self) -> Result<Option<SortKey>> {
        self.catalog
            .as_ref()
            .and_then(|c| c.default_sort.as_deref())
            .map(str::parse::<SortKey>)
            .transpose()
            .map_err(|e| CatalogError::InvalidConfigValueError {
                field: "catalog.default_sort".to_string(),
                value: self
                    .catalog
                    .as_ref()
                    .and_then(|c| c.default_sort.clone())
                    .unwrap_or_default(),
                reason: e.to_string(),
            })
    }

    pub fn default_direction(&self) -> Result<SortDirection> {
        match self.catalog.as_ref().and_then(|c| c.default_direction.as_deref()) {
            None => Ok(SortDirection::Ascending),
            Some(raw) => raw
                .parse()
                .map_err(|e: CatalogError| CatalogError::InvalidConfigValueError {
                    field: "catalog.default_direction".to_string(),
                    value: raw.to_string(),
                    reason: e.to_string(),
                }),
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn source(&self) -> &str {
        &self.source.endpoint
    }

    fn page_size(&self) -> usize {
        self.catalog
            .as_ref()
            .and_then(|c| c.page_size)
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.source.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
