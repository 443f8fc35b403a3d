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

use std::{borrow::Cow, fmt};

use log::{debug, trace, warn};
use phonenumber::PhoneNumber;

use super::{
    errors::{ConfigError, FieldError, InvalidNumberError},
    helper_constants::{
        CONTROL_CLASS, DATA_REGION_CODES, DATA_STRICT, PLUS_SIGN, REQUIRED_MESSAGE,
    },
    helper_functions::{field_path, html_id, html_name, region_code_field_name, validate_regions},
    helper_types::RegionList,
    rules::Rule,
    OutputFormat, PhoneValue,
};
use crate::{
    forms::{FormData, Html},
    i18n,
    interfaces::NumberingPlan,
    macros::owned_from_cow_or,
    numbering_plan::NUMBERING_PLAN,
    string_util::{normalize_line, strip_whitespace},
};

/// Text input for a phone number, optionally paired with a calling code
/// chosen in the companion [`HiddenField`](super::HiddenField).
#[derive(Clone)]
pub struct PhoneControl {
    name: String,
    parent_path: Vec<String>,
    label: Option<String>,
    max_length: Option<usize>,

    value: String,
    /// Calling code submitted through the companion field, e.g. `+420`.
    region_code: Option<String>,

    rules: Vec<Rule>,

    /// Regions a submitted number must belong to. Empty means any region.
    allowed_regions: Vec<String>,
    /// Regions used to interpret numbers written without a calling code.
    expected_regions: Vec<String>,
    output_format: OutputFormat,
    /// Keep whitespace in string output. When `false` every whitespace
    /// character is removed.
    output_format_whitespaces: bool,

    numbering_plan: &'static dyn NumberingPlan,
}

impl PhoneControl {
    pub fn new(name: &str, label: Option<&str>, max_length: Option<usize>) -> Self {
        let mut rules = Vec::new();
        if let Some(max_length) = max_length {
            rules.push(Rule::max_length(max_length));
        }
        Self {
            name: name.to_owned(),
            parent_path: Vec::new(),
            label: label.map(str::to_owned),
            max_length,
            value: String::new(),
            region_code: None,
            rules,
            allowed_regions: Vec::new(),
            expected_regions: Vec::new(),
            output_format: OutputFormat::default(),
            output_format_whitespaces: true,
            numbering_plan: &*NUMBERING_PLAN,
        }
    }

    // Setup

    /// Restricts accepted numbers to `regions`. They also become the expected
    /// regions.
    pub fn set_allowed_regions(
        &mut self,
        regions: impl Into<RegionList>,
    ) -> Result<&mut Self, ConfigError> {
        let regions = regions.into();
        validate_regions(&regions)?;

        self.expected_regions = regions.0.clone();
        self.allowed_regions = regions.0;
        Ok(self)
    }

    pub fn set_expected_regions(
        &mut self,
        regions: impl Into<RegionList>,
    ) -> Result<&mut Self, ConfigError> {
        let regions = regions.into();
        validate_regions(&regions)?;

        self.expected_regions = regions.0;
        Ok(self)
    }

    pub fn set_output_format(&mut self, output_format: impl Into<OutputFormat>) -> &mut Self {
        self.output_format = output_format.into();
        self
    }

    pub fn set_output_format_whitespaces(&mut self, whitespaces: bool) -> &mut Self {
        self.output_format_whitespaces = whitespaces;
        self
    }

    /// `Some(message)` makes the field required, `None` optional.
    pub fn set_required(&mut self, message: Option<&str>) -> &mut Self {
        self.rules.retain(|rule| !matches!(rule, Rule::Required { .. }));
        if let Some(message) = message {
            self.rules.insert(0, Rule::Required { message: message.to_owned() });
        }
        self
    }

    /// Makes the field required with the default message.
    pub fn make_required(&mut self) -> &mut Self {
        self.set_required(Some(REQUIRED_MESSAGE))
    }

    pub fn set_max_length(&mut self, max_length: Option<usize>) -> &mut Self {
        self.rules.retain(|rule| !matches!(rule, Rule::MaxLength { .. }));
        self.max_length = max_length;
        if let Some(max_length) = max_length {
            let at = usize::from(self.is_required());
            self.rules.insert(at, Rule::max_length(max_length));
        }
        self
    }

    pub fn add_rule(&mut self, rule: Rule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    pub fn add_pattern_rule(&mut self, pattern: &str, message: &str) -> Result<&mut Self, ConfigError> {
        let rule = Rule::pattern(pattern, message)?;
        Ok(self.add_rule(rule))
    }

    /// Places the field into a nested container, e.g. `["contact"]` renders
    /// as `contact[phone]`.
    pub fn set_parent_path(&mut self, path: &[&str]) -> &mut Self {
        self.parent_path = path.iter().map(|segment| (*segment).to_owned()).collect();
        self
    }

    pub fn set_numbering_plan(&mut self, numbering_plan: &'static dyn NumberingPlan) -> &mut Self {
        self.numbering_plan = numbering_plan;
        self
    }

    // Submitted data

    pub fn set_value(&mut self, value: &str) -> &mut Self {
        self.value = normalize_line(value).into_owned();
        self
    }

    pub fn set_region_code(&mut self, region_code: Option<&str>) -> &mut Self {
        self.region_code = region_code
            .map(|code| code.trim().to_owned())
            .filter(|code| !code.is_empty());
        self
    }

    /// Reads this field's value and the companion region code from the
    /// submitted data, at this field's container path.
    pub fn load_http_data(&mut self, data: &FormData) {
        let value = data
            .get(field_path(&self.parent_path, &self.name).as_slice())
            .unwrap_or_default();
        self.set_value(value);

        let companion = region_code_field_name(&self.name);
        let region_code = data.get(field_path(&self.parent_path, &companion).as_slice());
        self.set_region_code(region_code);
    }

    // Getters

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn html_name(&self) -> String {
        html_name(&self.parent_path, &self.name)
    }

    pub fn html_id(&self) -> String {
        html_id(&self.parent_path, &self.name)
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn region_code(&self) -> Option<&str> {
        self.region_code.as_deref()
    }

    pub fn allowed_regions(&self) -> &[String] {
        &self.allowed_regions
    }

    pub fn expected_regions(&self) -> &[String] {
        &self.expected_regions
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub fn output_format_whitespaces(&self) -> bool {
        self.output_format_whitespaces
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn is_required(&self) -> bool {
        self.rules.iter().any(|rule| matches!(rule, Rule::Required { .. }))
    }

    pub fn is_filled(&self) -> bool {
        !self.value.is_empty()
    }

    /// Allow-list if configured, otherwise the expected regions.
    fn candidate_regions(&self) -> &[String] {
        if self.allowed_regions.is_empty() {
            &self.expected_regions
        } else {
            &self.allowed_regions
        }
    }

    // Validations

    /// Value prefixed with the submitted calling code. A value that already
    /// contains `+` is taken as a full international number.
    pub fn phone_with_region_code(&self) -> Cow<'_, str> {
        if self.value.contains(PLUS_SIGN) {
            return Cow::Borrowed(&self.value);
        }
        match &self.region_code {
            Some(region_code) => Cow::Owned(fast_cat::concat_str!(region_code, " ", &self.value)),
            None => Cow::Borrowed(&self.value),
        }
    }

    fn parse_valid_for_region(&self, number: &str, region_code: &str) -> Option<PhoneNumber> {
        trace!("Trying {:?} as a number of region {}", number, region_code);
        match self.numbering_plan.parse(number, Some(region_code)) {
            Ok(phone_number) => self
                .numbering_plan
                .is_valid_number_for_region(&phone_number, region_code)
                .then_some(phone_number),
            Err(err) => {
                debug!("{:?} is not a number of region {}: {}", number, region_code, err);
                None
            }
        }
    }

    /// The phone-number rule.
    ///
    /// With an allow-list the number must be valid for one of the allowed
    /// regions. Otherwise it must be a valid number either on its own or when
    /// read as a number of one of the expected regions.
    pub fn validate_number(&self) -> bool {
        if !self.is_filled() && !self.is_required() {
            return true;
        }
        if !self.allowed_regions.is_empty() {
            return self.validate_allowed_regions();
        }

        let number = self.phone_with_region_code();
        let plan = self.numbering_plan;
        if plan.parse(&number, None).is_ok_and(|phone_number| plan.is_valid_number(&phone_number)) {
            return true;
        }
        self.expected_regions.iter().any(|region_code| {
            plan.parse(&number, Some(region_code))
                .is_ok_and(|phone_number| plan.is_valid_number(&phone_number))
        })
    }

    pub fn validate_allowed_regions(&self) -> bool {
        if self.allowed_regions.is_empty() {
            return true;
        }
        if !self.is_filled() && !self.is_required() {
            return true;
        }

        let number = self.phone_with_region_code();
        self.allowed_regions
            .iter()
            .any(|region_code| self.parse_valid_for_region(&number, region_code).is_some())
    }

    /// Runs the field's rules; the first failing rule is reported.
    pub fn validate(&self) -> Result<(), FieldError> {
        let filled = self.is_filled();
        for rule in &self.rules {
            if !filled && !rule.applies_to_empty() {
                continue;
            }
            let passed = match rule {
                Rule::Required { .. } => filled,
                Rule::MaxLength { max_length, .. } => self.value.chars().count() <= *max_length,
                Rule::PhoneNumber { .. } => self.validate_number(),
                Rule::Pattern { regex, .. } => regex.is_match(&self.value),
            };
            if !passed {
                return Err(FieldError {
                    field: self.html_name(),
                    message: rule.message().to_owned(),
                });
            }
        }
        Ok(())
    }

    // Value

    /// Returns the submitted number in the configured output format.
    ///
    /// `Ok(None)` for an empty field. Candidate regions are tried in order and
    /// the first region the number is valid for wins; without a match the
    /// number is parsed on its own.
    pub fn get_value(&self) -> Result<Option<PhoneValue>, InvalidNumberError> {
        if !self.is_filled() {
            return Ok(None);
        }

        let number = self.phone_with_region_code();
        if let OutputFormat::Raw = self.output_format {
            return Ok(Some(PhoneValue::Text(self.finish_text(number.into_owned()))));
        }

        for region_code in self.candidate_regions() {
            if let Some(phone_number) = self.parse_valid_for_region(&number, region_code) {
                return Ok(Some(self.output(phone_number)));
            }
        }

        let phone_number = self.numbering_plan.parse(&number, None)?;
        Ok(Some(self.output(phone_number)))
    }

    fn output(&self, phone_number: PhoneNumber) -> PhoneValue {
        let text = match self.output_format {
            OutputFormat::PhoneNumberObject => return PhoneValue::Number(phone_number),
            OutputFormat::NationalNumber => {
                self.numbering_plan.national_significant_number(&phone_number)
            }
            OutputFormat::Standard(number_format) => {
                self.numbering_plan.format(&phone_number, number_format)
            }
            OutputFormat::Raw => unreachable!("raw output is returned before parsing"),
        };
        PhoneValue::Text(self.finish_text(text))
    }

    fn finish_text(&self, text: String) -> String {
        if self.output_format_whitespaces {
            return text;
        }
        owned_from_cow_or!(strip_whitespace(&text), text)
    }

    // Rendering

    /// Key → calling code pairs for the region set of this field, in
    /// configuration order with calling code groups expanded.
    pub fn region_codes(&self) -> Vec<(&str, &'static str)> {
        let mut region_codes: Vec<(&str, &'static str)> = Vec::new();
        for region_code in self.candidate_regions() {
            let Some(calling_codes) = i18n::calling_codes_for(region_code) else {
                warn!("Region {} has no calling code", region_code);
                continue;
            };
            for (key, calling_code) in calling_codes.entries(region_code) {
                if region_codes.iter().all(|(existing, _)| *existing != key) {
                    region_codes.push((key, calling_code));
                }
            }
        }
        region_codes
    }

    /// JSON object for the `data-region-codes` attribute, `None` when the
    /// field has no regions.
    pub fn region_codes_json(&self) -> Option<String> {
        let region_codes = self.region_codes();
        if region_codes.is_empty() {
            return None;
        }
        let map: serde_json::Map<String, serde_json::Value> = region_codes
            .into_iter()
            .map(|(key, calling_code)| (key.to_owned(), serde_json::Value::from(calling_code)))
            .collect();
        Some(serde_json::Value::Object(map).to_string())
    }

    pub fn get_control(&self) -> Html {
        let mut control = Html::el("input");
        control
            .attr("type", "tel")
            .attr("name", self.html_name())
            .attr("id", self.html_id());
        if let Some(max_length) = self.max_length {
            let mut buf = itoa::Buffer::new();
            control.attr("maxlength", buf.format(max_length));
        }
        control
            .attr("value", self.value.as_str())
            .flag("required", self.is_required())
            .add_class(CONTROL_CLASS);

        if let Some(region_codes) = self.region_codes_json() {
            control
                .data(DATA_REGION_CODES, region_codes)
                .data(DATA_STRICT, if self.allowed_regions.is_empty() { "0" } else { "1" });
        }
        control
    }

    pub fn get_label(&self) -> Option<Html> {
        let caption = self.label.as_deref()?;
        let mut label = Html::el("label");
        label.attr("for", self.html_id()).set_text(caption);
        Some(label)
    }
}

impl fmt::Debug for PhoneControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhoneControl")
            .field("name", &self.name)
            .field("parent_path", &self.parent_path)
            .field("value", &self.value)
            .field("region_code", &self.region_code)
            .field("allowed_regions", &self.allowed_regions)
            .field("expected_regions", &self.expected_regions)
            .field("output_format", &self.output_format)
            .field("output_format_whitespaces", &self.output_format_whitespaces)
            .finish_non_exhaustive()
    }
}
