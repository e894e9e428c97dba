//! Notion page identifiers.
//!
//! Notion accepts page ids either as 32 lowercase hex characters or in the
//! hyphenated 8-4-4-4-12 UUID layout. Page URLs carry the id at the end of
//! the slug (`https://www.notion.so/My-Page-<32 hex>`) or as a UUID.

use crate::utils::error::{NotionError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const HEX_ID: &str = "[a-f0-9]{32}";
const UUID_ID: &str = "[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}";

static EXACT_HEX: Lazy<Regex> = Lazy::new(|| anchored(HEX_ID));
static EXACT_UUID: Lazy<Regex> = Lazy::new(|| anchored(UUID_ID));
static ANY_HEX: Lazy<Regex> = Lazy::new(|| Regex::new(HEX_ID).expect("hex id pattern is valid"));
static ANY_UUID: Lazy<Regex> =
    Lazy::new(|| Regex::new(UUID_ID).expect("uuid id pattern is valid"));

fn anchored(pattern: &str) -> Regex {
    Regex::new(&format!("^{}$", pattern)).expect("anchored id pattern is valid")
}

/// Reduces a page reference to its bare 32-character hex id.
///
/// Accepts a bare id, a hyphenated UUID, or any text (usually a URL)
/// containing either. Input that contains neither is returned unchanged.
pub fn extract_page_id(page_url_or_id: &str) -> String {
    if EXACT_HEX.is_match(page_url_or_id) {
        return page_url_or_id.to_string();
    }

    if EXACT_UUID.is_match(page_url_or_id) {
        return page_url_or_id.replace('-', "");
    }

    if let Some(m) = ANY_HEX.find(page_url_or_id) {
        return m.as_str().to_string();
    }

    if let Some(m) = ANY_UUID.find(page_url_or_id) {
        return m.as_str().replace('-', "");
    }

    tracing::debug!("No page id pattern in {:?}, using it as-is", page_url_or_id);
    page_url_or_id.to_string()
}

/// Inserts UUID hyphens into a 32-character id; other lengths pass through.
pub fn format_page_id(page_id: &str) -> String {
    let chars: Vec<char> = page_id.chars().collect();
    if chars.len() != 32 {
        return page_id.to_string();
    }

    let part = |from: usize, to: usize| chars[from..to].iter().collect::<String>();
    format!(
        "{}-{}-{}-{}-{}",
        part(0, 8),
        part(8, 12),
        part(12, 16),
        part(16, 20),
        part(20, 32)
    )
}

/// A validated Notion page id, stored as 32 lowercase hex characters.
///
/// `Display` renders the hyphenated form expected by the Notion API;
/// serde uses the bare form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PageId(String);

impl PageId {
    pub fn parse(input: &str) -> Result<Self> {
        let extracted = extract_page_id(input.trim());
        if EXACT_HEX.is_match(&extracted) {
            Ok(Self(extracted))
        } else {
            Err(NotionError::InvalidPageId {
                input: input.to_string(),
            })
        }
    }

    pub fn as_hex(&self) -> &str {
        &self.0
    }

    pub fn hyphenated(&self) -> String {
        format_page_id(&self.0)
    }
}

impl FromStr for PageId {
    type Err = NotionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PageId {
    type Error = NotionError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<PageId> for String {
    fn from(id: PageId) -> Self {
        id.0
    }
}

impl AsRef<str> for PageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hyphenated())
    }
}
