//! Durable record cache, one JSON file per surname.
//!
//! Entries carry no TTL and are never invalidated. The cache is an
//! optimization only: callers treat read failures as misses and write
//! failures as no-ops.

use std::fs;
use std::path::PathBuf;

use myoji_types::SurnameRecord;

use crate::error::CacheError;

const CACHE_SUBDIR: &str = "myoji";
const KEY_PREFIX: &str = "myoji_";
const CODEPOINT_SEPARATOR: &str = "_";

/// Filesystem-safe identifier for a surname: the decimal code points of its
/// characters joined by `_`. Injective, and independent of how the platform
/// encodes non-ASCII filenames.
pub fn cache_key(surname: &str) -> String {
    let points: Vec<String> = surname.chars().map(|c| (c as u32).to_string()).collect();
    format!("{KEY_PREFIX}{}", points.join(CODEPOINT_SEPARATOR))
}

pub struct CacheStore {
    root: PathBuf,
}

impl CacheStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn entry_path(&self, surname: &str) -> PathBuf {
        self.root
            .join(CACHE_SUBDIR)
            .join(format!("{}.json", cache_key(surname)))
    }

    /// `Ok(None)` is a miss. Unreadable or malformed entries are reported as
    /// errors so the caller can decide to treat them as misses.
    pub fn get(&self, surname: &str) -> Result<Option<SurnameRecord>, CacheError> {
        let path = self.entry_path(surname);
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&data)?))
    }

    /// Serialize the record under the surname's key, creating the directory
    /// hierarchy as needed. Non-ASCII text is stored literally.
    pub fn put(&self, surname: &str, record: &SurnameRecord) -> Result<(), CacheError> {
        let path = self.entry_path(surname);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&path, serde_json::to_string_pretty(record)?)?;
        Ok(())
    }
}
