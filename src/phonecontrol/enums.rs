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

use std::str::FromStr;

use phonenumber::PhoneNumber;
use strum::{AsRefStr, EnumIter, EnumString};

use super::errors::ConfigError;

/// Defines the various standardized formats for representing phone numbers.
///
/// For example, the Google Switzerland office number would be:
/// - **INTERNATIONAL**: `+41 44 668 1800`
/// - **NATIONAL**: `044 668 1800`
/// - **E164**: `+41446681800` (international format without formatting)
/// - **RFC3966**: `tel:+41-44-668-1800` (hyphen-separated with a "tel:" prefix)
#[derive(Debug, EnumIter, EnumString, AsRefStr, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberFormat {
    /// **E.164 format.**
    /// Always starts with a `+` followed by the country code, no separators.
    #[strum(serialize = "E164")]
    E164,
    /// **International format.**
    /// Country code plus spaces for readability.
    #[strum(serialize = "INTERNATIONAL")]
    International,
    /// **National format.**
    /// Dialling format within the number's own country, national prefix included.
    #[strum(serialize = "NATIONAL")]
    National,
    /// **RFC3966 format.**
    /// `tel:` URI with hyphen separators.
    #[strum(serialize = "RFC3966")]
    RFC3966,
}

impl PhoneNumberFormat {
    /// Numeric constant libphonenumber uses for this format.
    pub fn legacy_code(self) -> i32 {
        match self {
            PhoneNumberFormat::E164 => 0,
            PhoneNumberFormat::International => 1,
            PhoneNumberFormat::National => 2,
            PhoneNumberFormat::RFC3966 => 3,
        }
    }
}

/// What [`PhoneControl::get_value`](super::PhoneControl::get_value) returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Submitted value prefixed with the selected calling code, unparsed.
    Raw,
    /// Only the national significant number digits.
    NationalNumber,
    /// The parsed [`PhoneNumber`].
    PhoneNumberObject,
    /// The number formatted by the numbering plan.
    Standard(PhoneNumberFormat),
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Standard(PhoneNumberFormat::E164)
    }
}

impl From<PhoneNumberFormat> for OutputFormat {
    fn from(value: PhoneNumberFormat) -> Self {
        OutputFormat::Standard(value)
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RAW" => Ok(OutputFormat::Raw),
            "NATIONAL_NUMBER" => Ok(OutputFormat::NationalNumber),
            "PHONE_NUMBER_OBJECT" => Ok(OutputFormat::PhoneNumberObject),
            other => PhoneNumberFormat::from_str(other)
                .map(OutputFormat::Standard)
                .map_err(|_| ConfigError::InvalidOutputFormat(other.to_owned())),
        }
    }
}

/// Legacy integer constants: libphonenumber formats are `0..=3`, the
/// field-specific formats are negative.
impl TryFrom<i64> for OutputFormat {
    type Error = ConfigError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -3 => Ok(OutputFormat::PhoneNumberObject),
            -2 => Ok(OutputFormat::NationalNumber),
            -1 => Ok(OutputFormat::Raw),
            0 => Ok(PhoneNumberFormat::E164.into()),
            1 => Ok(PhoneNumberFormat::International.into()),
            2 => Ok(PhoneNumberFormat::National.into()),
            3 => Ok(PhoneNumberFormat::RFC3966.into()),
            other => Err(ConfigError::InvalidOutputFormat(other.to_string())),
        }
    }
}

/// Value of a filled phone field.
#[derive(Debug, Clone, PartialEq)]
pub enum PhoneValue {
    Text(String),
    Number(PhoneNumber),
}

impl PhoneValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PhoneValue::Text(text) => Some(text),
            PhoneValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<&PhoneNumber> {
        match self {
            PhoneValue::Number(number) => Some(number),
            PhoneValue::Text(_) => None,
        }
    }
}
