use crate::core::filename::{FilenameRules, DEFAULT_MAX_LEN, DEFAULT_PLACEHOLDER};
use crate::core::token::{TokenLookup, DEFAULT_ENV_FILE, DEFAULT_ENV_VAR, DEFAULT_KEY};
use crate::utils::error::{NotionError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "notion-utils.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub token: TokenConfig,
    #[serde(default)]
    pub filename: FilenameConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenConfig {
    pub env_var: Option<String>,
    pub env_file: Option<String>,
    pub key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilenameConfig {
    pub max_length: Option<usize>,
    pub placeholder: Option<String>,
}

impl TomlConfig {
    /// Reads and parses a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(NotionError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| NotionError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Loads `explicit` if given, else `notion-utils.toml` from the working
    /// directory when present, else the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!("Loading configuration from {}", path.display());
            return Self::from_file(path);
        }

        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            tracing::debug!("Loading configuration from ./{}", DEFAULT_CONFIG_FILE);
            return Self::from_file(local);
        }

        Ok(Self::default())
    }

    pub fn env_var(&self) -> &str {
        self.token.env_var.as_deref().unwrap_or(DEFAULT_ENV_VAR)
    }

    pub fn env_file(&self) -> &str {
        self.token.env_file.as_deref().unwrap_or(DEFAULT_ENV_FILE)
    }

    pub fn key(&self) -> &str {
        self.token.key.as_deref().unwrap_or(DEFAULT_KEY)
    }

    pub fn max_length(&self) -> usize {
        self.filename.max_length.unwrap_or(DEFAULT_MAX_LEN)
    }

    pub fn placeholder(&self) -> &str {
        self.filename
            .placeholder
            .as_deref()
            .unwrap_or(DEFAULT_PLACEHOLDER)
    }

    pub fn token_lookup(&self) -> TokenLookup {
        TokenLookup::new()
            .env_var(self.env_var())
            .env_file(self.env_file())
            .key(self.key())
    }

    pub fn filename_rules(&self) -> FilenameRules {
        FilenameRules::new(self.max_length(), self.placeholder())
    }

    fn validate_config(&self) -> Result<()> {
        validation::validate_key_name("token.env_var", self.env_var())?;
        validation::validate_file_name("token.env_file", self.env_file())?;
        validation::validate_key_name("token.key", self.key())?;

        validation::validate_positive_number("filename.max_length", self.max_length(), 1)?;

        let placeholder = self.placeholder();
        validation::validate_non_empty_string("filename.placeholder", placeholder)?;
        let rules = self.filename_rules();
        if rules.sanitize(placeholder) != placeholder {
            return Err(NotionError::InvalidConfigValueError {
                field: "filename.placeholder".to_string(),
                value: placeholder.to_string(),
                reason: format!(
                    "Placeholder must already be a sanitized name (e.g. {:?})",
                    rules.sanitize(placeholder)
                ),
            });
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
