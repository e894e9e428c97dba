use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotionError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No Notion page id found in {input:?}")]
    InvalidPageId { input: String },
}

impl NotionError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            NotionError::IoError(_) => "Check that the path exists and is writable",
            NotionError::ConfigError { .. } => "Check the configuration file syntax",
            NotionError::InvalidConfigValueError { .. } => {
                "Fix the reported configuration field and try again"
            }
            NotionError::InvalidPageId { .. } => {
                "Pass a 32-character page id, a hyphenated UUID or a notion.so page URL"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, NotionError>;
