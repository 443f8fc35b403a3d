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

use super::{
    errors::ConfigError,
    helper_constants::{HTML_ID_PREFIX, REGION_CODE_SUFFIX},
    helper_types::RegionList,
};
use crate::i18n;

/// Fails on the first region that has no entry in the calling code table.
pub(super) fn validate_regions(regions: &RegionList) -> Result<(), ConfigError> {
    match regions.iter().find(|region| !i18n::is_supported_region(region)) {
        Some(region) => Err(ConfigError::UnsupportedRegion(region.to_owned())),
        None => Ok(()),
    }
}

/// Name of the hidden field carrying the calling code for `name`.
pub fn region_code_field_name(name: &str) -> String {
    fast_cat::concat_str!(name, REGION_CODE_SUFFIX)
}

pub(super) fn field_path(parent_path: &[String], name: &str) -> Vec<String> {
    let mut path = Vec::with_capacity(parent_path.len() + 1);
    path.extend(parent_path.iter().cloned());
    path.push(name.to_owned());
    path
}

/// `["contact", "work"]` + `phone` → `contact[work][phone]`.
pub(super) fn html_name(parent_path: &[String], name: &str) -> String {
    let Some((first, rest)) = parent_path.split_first() else {
        return name.to_owned();
    };
    let mut html_name = first.clone();
    for segment in rest.iter().map(String::as_str).chain(std::iter::once(name)) {
        html_name.push('[');
        html_name.push_str(segment);
        html_name.push(']');
    }
    html_name
}

/// `["contact"]` + `phone` → `frm-contact-phone`.
pub(super) fn html_id(parent_path: &[String], name: &str) -> String {
    let mut html_id = HTML_ID_PREFIX.to_owned();
    for segment in parent_path.iter().map(String::as_str).chain(std::iter::once(name)) {
        html_id.push('-');
        html_id.push_str(segment);
    }
    html_id
}
