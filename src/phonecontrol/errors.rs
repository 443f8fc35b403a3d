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

use std::path::PathBuf;

use thiserror::Error;

use crate::regexp_cache::InvalidRegexError;

/// Mistakes in field configuration. These come from code or config files,
/// never from user input, and are reported when the field is configured.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Region {0} is not supported.")]
    UnsupportedRegion(String),

    #[error("{0}")]
    InvalidRegex(#[from] InvalidRegexError),

    #[error("Unknown output format: {0}")]
    InvalidOutputFormat(String),

    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Submitted value could not be turned into a phone number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidNumberError {
    #[error("Failed to parse phone number: {0}")]
    Parse(String),

    #[error("Region {0} is unknown to the numbering plan")]
    UnknownRegion(String),

    #[error("Numbering plan failed unexpectedly")]
    Panicked,
}

/// A validation rule of a field failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
