//! Notion token discovery.
//!
//! The environment variable wins. Otherwise the nearest `.env.notion` file
//! found by walking from the start directory up to the filesystem root is
//! used, and within a file the first `NOTION_TOKEN=...` line wins.

use crate::domain::model::{FoundToken, TokenSource};
use crate::domain::ports::{EnvSource, ProcessEnv};
use regex::Regex;
use std::path::{Path, PathBuf};

pub const DEFAULT_ENV_VAR: &str = "NOTION_TOKEN";
pub const DEFAULT_ENV_FILE: &str = ".env.notion";
pub const DEFAULT_KEY: &str = "NOTION_TOKEN";

#[derive(Debug, Clone)]
pub struct TokenLookup {
    env_var: String,
    env_file: String,
    key: String,
    start_dir: Option<PathBuf>,
}

impl Default for TokenLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenLookup {
    pub fn new() -> Self {
        Self {
            env_var: DEFAULT_ENV_VAR.to_string(),
            env_file: DEFAULT_ENV_FILE.to_string(),
            key: DEFAULT_KEY.to_string(),
            start_dir: None,
        }
    }

    pub fn env_var(mut self, name: impl Into<String>) -> Self {
        self.env_var = name.into();
        self
    }

    pub fn env_file(mut self, name: impl Into<String>) -> Self {
        self.env_file = name.into();
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Directory the upward search starts from. Defaults to the current
    /// working directory.
    pub fn start_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.start_dir = Some(dir.into());
        self
    }

    /// Looks the token up using the process environment.
    pub fn find(&self) -> Option<FoundToken> {
        self.find_with(&ProcessEnv)
    }

    pub fn find_with<E: EnvSource + ?Sized>(&self, env: &E) -> Option<FoundToken> {
        if let Some(found) = self.token_from_env(env) {
            return Some(found);
        }

        match std::env::current_dir() {
            Ok(cwd) => self.search_files(&cwd),
            Err(e) => {
                tracing::warn!("Cannot determine working directory: {}", e);
                None
            }
        }
    }

    /// Same as [`find_with`](Self::find_with), with relative start
    /// directories resolved against `cwd`.
    pub fn find_from<E: EnvSource + ?Sized>(&self, env: &E, cwd: &Path) -> Option<FoundToken> {
        self.token_from_env(env).or_else(|| self.search_files(cwd))
    }

    fn token_from_env<E: EnvSource + ?Sized>(&self, env: &E) -> Option<FoundToken> {
        let token = env.var(&self.env_var).filter(|t| !t.is_empty())?;
        tracing::debug!("Using token from ${}", self.env_var);
        Some(FoundToken {
            token,
            source: TokenSource::Environment(self.env_var.clone()),
        })
    }

    fn search_files(&self, cwd: &Path) -> Option<FoundToken> {
        let start = match &self.start_dir {
            Some(dir) => resolve_start_dir(dir, cwd),
            None => cwd.to_path_buf(),
        };

        let pattern = key_pattern(&self.key);
        for dir in start.ancestors() {
            let candidate = dir.join(&self.env_file);
            if let Some(token) = read_token_file(&candidate, &pattern) {
                tracing::debug!("Using token from {}", candidate.display());
                return Some(FoundToken {
                    token,
                    source: TokenSource::File(candidate),
                });
            }
        }

        tracing::debug!(
            "No token in ${} or any {} above {}",
            self.env_var,
            self.env_file,
            start.display()
        );
        None
    }
}

/// Absolute form of `dir` so that `ancestors()` walks real parents.
/// `.` and `..` components are resolved through the filesystem when the
/// directory exists.
fn resolve_start_dir(dir: &Path, cwd: &Path) -> PathBuf {
    let joined = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        cwd.join(dir)
    };
    joined.canonicalize().unwrap_or(joined)
}

fn key_pattern(key: &str) -> Regex {
    // An escaped literal key always yields a valid pattern.
    Regex::new(&format!(
        r"(?m)^[ \t]*(?:export[ \t]+)?{}=(\S+)",
        regex::escape(key)
    ))
    .expect("escaped key pattern is valid")
}

fn read_token_file(path: &Path, pattern: &Regex) -> Option<String> {
    if !path.is_file() {
        return None;
    }

    match std::fs::read_to_string(path) {
        Ok(content) => parse_token(&content, pattern),
        Err(e) => {
            tracing::warn!("Skipping unreadable {}: {}", path.display(), e);
            None
        }
    }
}

fn parse_token(content: &str, pattern: &Regex) -> Option<String> {
    pattern
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Returns the Notion token from `$NOTION_TOKEN` or the nearest `.env.notion`.
pub fn find_notion_token() -> Option<String> {
    TokenLookup::new().find().map(FoundToken::into_token)
}
