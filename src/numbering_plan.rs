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

use std::{
    panic::{catch_unwind, AssertUnwindSafe},
    sync::LazyLock,
};

use log::{debug, warn};
use phonenumber::{country, Mode, PhoneNumber};

use crate::{
    interfaces::NumberingPlan,
    phonecontrol::{errors::InvalidNumberError, PhoneNumberFormat},
};

/// Shared numbering plan used by every field unless one is injected.
pub static NUMBERING_PLAN: LazyLock<PhoneNumberCrateBackend> =
    LazyLock::new(PhoneNumberCrateBackend::new);

/// [`NumberingPlan`] backed by the `phonenumber` crate.
///
/// The crate is known to panic on some malformed inputs, so every call into it
/// runs under `catch_unwind` and a panic is reported as an invalid number.
pub struct PhoneNumberCrateBackend {
}

impl PhoneNumberCrateBackend {
    pub fn new() -> Self {
        Self {}
    }

    fn country_id(region_code: &str) -> Option<country::Id> {
        match region_code.parse::<country::Id>() {
            Ok(id) => Some(id),
            Err(_) => {
                warn!("Region code {} is unknown to the numbering plan", region_code);
                None
            }
        }
    }
}

impl Default for PhoneNumberCrateBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl From<PhoneNumberFormat> for Mode {
    fn from(value: PhoneNumberFormat) -> Self {
        match value {
            PhoneNumberFormat::E164 => Mode::E164,
            PhoneNumberFormat::International => Mode::International,
            PhoneNumberFormat::National => Mode::National,
            PhoneNumberFormat::RFC3966 => Mode::Rfc3966,
        }
    }
}

impl NumberingPlan for PhoneNumberCrateBackend {
    fn parse(
        &self,
        number: &str,
        default_region: Option<&str>,
    ) -> Result<PhoneNumber, InvalidNumberError> {
        let country = match default_region {
            Some(region_code) => Some(
                Self::country_id(region_code)
                    .ok_or_else(|| InvalidNumberError::UnknownRegion(region_code.to_owned()))?,
            ),
            None => None,
        };

        let owned = number.to_owned();
        match catch_unwind(move || phonenumber::parse(country, owned)) {
            Ok(Ok(phone_number)) => Ok(phone_number),
            Ok(Err(err)) => {
                debug!("Failed to parse phone number {:?}: {}", number, err);
                Err(InvalidNumberError::Parse(err.to_string()))
            }
            Err(_) => {
                warn!("phonenumber panicked while parsing {:?}", number);
                Err(InvalidNumberError::Panicked)
            }
        }
    }

    fn is_valid_number(&self, phone_number: &PhoneNumber) -> bool {
        catch_unwind(AssertUnwindSafe(|| phonenumber::is_valid(phone_number))).unwrap_or_else(|_| {
            warn!("phonenumber panicked while validating {:?}", phone_number);
            false
        })
    }

    fn is_valid_number_for_region(&self, phone_number: &PhoneNumber, region_code: &str) -> bool {
        let Some(id) = Self::country_id(region_code) else {
            return false;
        };
        if !self.is_valid_number(phone_number) {
            return false;
        }
        catch_unwind(AssertUnwindSafe(|| phone_number.country().id()))
            .ok()
            .flatten()
            .is_some_and(|number_region| number_region == id)
    }

    fn format(&self, phone_number: &PhoneNumber, number_format: PhoneNumberFormat) -> String {
        let mode = Mode::from(number_format);
        catch_unwind(AssertUnwindSafe(|| phone_number.format().mode(mode).to_string()))
            .unwrap_or_else(|_| {
                warn!("phonenumber panicked while formatting {:?}", phone_number);
                // E164 needs no per-region rules and still carries every digit
                let mut buf = itoa::Buffer::new();
                let code = buf.format(phone_number.code().value());
                let national_number = self.national_significant_number(phone_number);
                fast_cat::concat_str!("+", code, &national_number)
            })
    }

    fn national_significant_number(&self, phone_number: &PhoneNumber) -> String {
        let national = phone_number.national();
        let zeros_start = "0".repeat(national.zeros() as usize);

        let mut buf = itoa::Buffer::new();
        let national_number = buf.format(national.value());
        fast_cat::concat_str!(&zeros_start, national_number)
    }
}
