use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Where a token was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "location", rename_all = "snake_case")]
pub enum TokenSource {
    Environment(String),
    File(PathBuf),
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenSource::Environment(var) => write!(f, "environment variable {}", var),
            TokenSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct FoundToken {
    pub token: String,
    pub source: TokenSource,
}

impl FoundToken {
    pub fn into_token(self) -> String {
        self.token
    }
}

// Keep secrets out of debug logs.
impl fmt::Debug for FoundToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FoundToken")
            .field("token", &mask_token(&self.token))
            .field("source", &self.source)
            .finish()
    }
}

/// Shows the first four characters of tokens longer than eight characters.
pub fn mask_token(token: &str) -> String {
    if token.chars().count() <= 8 {
        return "****".to_string();
    }
    let prefix: String = token.chars().take(4).collect();
    format!("{}…", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("secret_abcdefghijkl"), "secr…");
        assert_eq!(mask_token("short"), "****");
        assert_eq!(mask_token(""), "****");
    }

    #[test]
    fn test_debug_masks_token() {
        let found = FoundToken {
            token: "secret_abcdefghijkl".to_string(),
            source: TokenSource::Environment("NOTION_TOKEN".to_string()),
        };
        let rendered = format!("{:?}", found);
        assert!(!rendered.contains("abcdefghijkl"));
        assert!(rendered.contains("secr…"));
    }
}
