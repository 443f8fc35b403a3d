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

use std::borrow::Cow;

/// Removes every whitespace character. Returns `Cow::Borrowed` if there was
/// nothing to remove.
pub fn strip_whitespace(s: &str) -> Cow<'_, str> {
    if !s.chars().any(char::is_whitespace) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|c| !c.is_whitespace()).collect())
}

/// Normalizes a single-line input value: line breaks become spaces and the
/// result is trimmed.
pub fn normalize_line(s: &str) -> Cow<'_, str> {
    if s.contains(['\r', '\n']) {
        let joined = s.replace("\r\n", " ").replace(['\r', '\n'], " ");
        return Cow::Owned(joined.trim().to_owned());
    }
    Cow::Borrowed(s.trim())
}
