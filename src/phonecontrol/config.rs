// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{fs, path::Path, str::FromStr};

use serde::{Deserialize, Deserializer};

use super::{
    errors::ConfigError,
    helper_constants::DEFAULT_REGEX,
    helper_functions::validate_regions,
    helper_types::RegionList,
    OutputFormat,
};
use crate::{i18n::RegionCode, regexp_cache::PATTERN_CACHE};

/// Settings shared by every phone field a [`PhoneControlFactory`](super::PhoneControlFactory)
/// creates.
///
/// ```toml
/// allowedRegions = ["CZ", "SK"]
/// outputFormat = "INTERNATIONAL"
/// outputFormatWhitespaces = false
/// regex = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct PhoneControlConfig {
    /// Whitelisted phone number regions.
    pub allowed_regions: RegionList,
    /// Regions to read numbers entered without a calling code as.
    pub expected_regions: RegionList,
    /// Output format of `get_value`.
    #[serde(deserialize_with = "deserialize_output_format")]
    pub output_format: OutputFormat,
    /// Keep whitespace in the returned number (or remove it).
    pub output_format_whitespaces: bool,
    /// Basic regex that rejects unwanted characters. `None` disables it.
    #[serde(deserialize_with = "deserialize_regex")]
    pub regex: Option<String>,
}

impl Default for PhoneControlConfig {
    fn default() -> Self {
        Self {
            allowed_regions: RegionList::default(),
            expected_regions: RegionList::from(RegionCode::default_expected()),
            output_format: OutputFormat::default(),
            output_format_whitespaces: true,
            regex: Some(DEFAULT_REGEX.to_owned()),
        }
    }
}

impl PhoneControlConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Checks regions against the calling code table and compiles the regex.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_regions(&self.allowed_regions)?;
        validate_regions(&self.expected_regions)?;
        if let Some(regex) = &self.regex {
            PATTERN_CACHE.get_full_match_regex(regex)?;
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OutputFormatRepr {
    Name(String),
    Code(i64),
}

fn deserialize_output_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match OutputFormatRepr::deserialize(deserializer)? {
        OutputFormatRepr::Name(name) => OutputFormat::from_str(&name),
        OutputFormatRepr::Code(code) => OutputFormat::try_from(code),
    };
    parsed.map_err(serde::de::Error::custom)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RegexRepr {
    Pattern(String),
    Enabled(bool),
}

fn deserialize_regex<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RegexRepr::deserialize(deserializer)? {
        RegexRepr::Pattern(pattern) if pattern.is_empty() => None,
        RegexRepr::Pattern(pattern) => Some(pattern),
        RegexRepr::Enabled(true) => Some(DEFAULT_REGEX.to_owned()),
        RegexRepr::Enabled(false) => None,
    })
}
