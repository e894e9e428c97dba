#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use crate::core::filename::{sanitize_filename, FilenameRules};
pub use crate::core::fs::ensure_directory;
pub use crate::core::page_id::{extract_page_id, format_page_id, PageId};
pub use crate::core::token::{find_notion_token, TokenLookup};
pub use crate::domain::model::{FoundToken, TokenSource};
pub use crate::utils::error::{NotionError, Result};
