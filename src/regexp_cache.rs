use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct InvalidRegexError(#[from] regex::Error);

/// Pattern rules are compiled once per pattern and shared by every field
/// created from the same configuration.
pub(crate) static PATTERN_CACHE: LazyLock<RegexCache> =
    LazyLock::new(|| RegexCache::with_capacity(8));

pub struct RegexCache {
    cache: DashMap<String, Arc<regex::Regex>>
}

impl RegexCache {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_regex(&self, pattern: &str) -> Result<Arc<regex::Regex>, InvalidRegexError> {
        if let Some(regex) = self.cache.get(pattern) {
            return Ok(regex.value().clone());
        }
        let entry = self.cache.entry(pattern.to_string()).or_try_insert_with(|| {
            regex::Regex::new(pattern).map(Arc::new)
        })?;
        Ok(entry.value().clone())
    }

    /// Same as [`RegexCache::get_regex`] but the returned regex only matches
    /// the whole input, the way form pattern rules are applied.
    pub fn get_full_match_regex(&self, pattern: &str) -> Result<Arc<regex::Regex>, InvalidRegexError> {
        self.get_regex(&fast_cat::concat_str!(r"\A(?:", pattern, r")\z"))
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }
}

impl Default for RegexCache {
    fn default() -> Self {
        Self::new()
    }
}
