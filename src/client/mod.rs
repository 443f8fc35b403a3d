//! Client side of the phone field.
//!
//! [`SCRIPT`] enhances every rendered `.phone-control` input that carries a
//! `data-region-codes` attribute with a calling code selector.
//! [`RegionCodeWidget`] holds the selection rules of that script so servers
//! can reason about what the browser will submit.

use serde_json::Value;

use crate::{
    forms::Html,
    phonecontrol::helper_constants::{DATA_REGION_CODES, DATA_STRICT, PLUS_SIGN, REGION_CODE_SUFFIX},
};

/// Browser script, to be served next to pages rendering phone fields.
pub const SCRIPT: &str = include_str!("../../assets/js/phone-control.js");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionOption {
    /// Region code, or a group key such as `DO2`.
    pub key: String,
    pub calling_code: String,
}

/// What the selector currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Index into [`RegionCodeWidget::options`].
    Option(usize),
    /// Calling code typed into the free-text "other" entry.
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionCodeWidget {
    options: Vec<RegionOption>,
    strict: bool,
}

impl RegionCodeWidget {
    /// Builds the widget from the two data attributes. A missing or empty
    /// region map means the input is left alone.
    pub fn from_attributes(
        region_codes: Option<&str>,
        strict: Option<&str>,
    ) -> Result<Option<Self>, serde_json::Error> {
        let Some(region_codes) = region_codes else {
            return Ok(None);
        };
        let map: serde_json::Map<String, Value> = serde_json::from_str(region_codes)?;
        let options: Vec<RegionOption> = map
            .into_iter()
            .filter_map(|(key, value)| {
                let calling_code = match value {
                    Value::String(code) => code,
                    Value::Number(code) => code.to_string(),
                    _ => return None,
                };
                Some(RegionOption { key, calling_code })
            })
            .collect();
        if options.is_empty() {
            return Ok(None);
        }

        let strict = strict.is_some_and(|strict| strict.trim().parse::<i64>() == Ok(1));
        Ok(Some(Self { options, strict }))
    }

    pub fn from_control(control: &Html) -> Result<Option<Self>, serde_json::Error> {
        Self::from_attributes(control.get_data(DATA_REGION_CODES), control.get_data(DATA_STRICT))
    }

    pub fn options(&self) -> &[RegionOption] {
        &self.options
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// A single strict option renders without a dropdown.
    pub fn has_single_option(&self) -> bool {
        self.options.len() == 1 && self.strict
    }

    pub fn allows_other(&self) -> bool {
        !self.strict
    }

    /// The selector is disabled while the user types a full international
    /// number.
    pub fn is_disabled_for(input: &str) -> bool {
        input.contains(PLUS_SIGN)
    }

    /// Whether a full international number typed into the input may be
    /// valid. A strict widget only accepts numbers starting with one of its
    /// calling codes; input without `+` is left to the selected code.
    pub fn accepts_international(&self, input: &str) -> bool {
        if !self.strict || !Self::is_disabled_for(input) {
            return true;
        }
        let compact: String = input
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        let Some(digits) = compact.strip_prefix(PLUS_SIGN) else {
            return false;
        };
        self.options
            .iter()
            .any(|option| digits.starts_with(option.calling_code.as_str()))
    }

    /// Free-text calling codes keep only digits and hyphens.
    pub fn sanitize_other(text: &str) -> String {
        text.chars().filter(|c| c.is_ascii_digit() || *c == '-').collect()
    }

    /// Selection shown when the page loads with `hidden_value` already in the
    /// hidden field (e.g. after a failed submission).
    pub fn initial_selection(&self, hidden_value: &str) -> Selection {
        let code = hidden_value.trim().trim_start_matches(PLUS_SIGN);
        if code.is_empty() {
            return Selection::Option(0);
        }
        if let Some(index) = self.options.iter().position(|option| option.calling_code == code) {
            return Selection::Option(index);
        }
        if self.allows_other() {
            Selection::Other(Self::sanitize_other(code))
        } else {
            Selection::Option(0)
        }
    }

    /// Name of the hidden input the script writes to, derived from the phone
    /// input's `name` attribute (`contact[phone]` → `contact[phoneRegionCode]`).
    pub fn region_code_input_name(phone_input_name: &str) -> String {
        match phone_input_name.strip_suffix(']') {
            Some(head) => fast_cat::concat_str!(head, REGION_CODE_SUFFIX, "]"),
            None => fast_cat::concat_str!(phone_input_name, REGION_CODE_SUFFIX),
        }
    }

    /// Value the script writes into the hidden field.
    pub fn region_code_value(&self, input: &str, selection: &Selection) -> String {
        if Self::is_disabled_for(input) {
            return String::new();
        }
        match selection {
            Selection::Option(index) => self
                .options
                .get(*index)
                .map(|option| fast_cat::concat_str!(PLUS_SIGN, &option.calling_code))
                .unwrap_or_default(),
            Selection::Other(text) => {
                let code = Self::sanitize_other(text);
                fast_cat::concat_str!(PLUS_SIGN, &code)
            }
        }
    }
}
