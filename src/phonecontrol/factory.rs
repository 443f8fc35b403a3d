use log::debug;

use super::{
    config::PhoneControlConfig,
    errors::ConfigError,
    helper_constants::NUMBER_NOT_VALID_MESSAGE,
    helper_functions::region_code_field_name,
    rules::Rule,
    HiddenField, PhoneControl,
};

/// Creates phone fields from one shared configuration.
///
/// Every call hands out two independent fields: the visible phone input and
/// the hidden input that carries the selected calling code.
#[derive(Debug, Clone)]
pub struct PhoneControlFactory {
    config: PhoneControlConfig,
}

impl PhoneControlFactory {
    /// Validates the configuration once, so that bad regions or a broken
    /// regex are reported at startup rather than on first use.
    pub fn new(config: PhoneControlConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PhoneControlConfig {
        &self.config
    }

    pub fn add_phone(
        &self,
        name: &str,
        label: Option<&str>,
        max_length: Option<usize>,
    ) -> Result<(PhoneControl, HiddenField), ConfigError> {
        self.add_phone_in(&[], name, label, max_length)
    }

    /// Same as [`PhoneControlFactory::add_phone`] for a field inside nested
    /// containers.
    pub fn add_phone_in(
        &self,
        parent_path: &[&str],
        name: &str,
        label: Option<&str>,
        max_length: Option<usize>,
    ) -> Result<(PhoneControl, HiddenField), ConfigError> {
        let config = &self.config;

        let mut input = PhoneControl::new(name, label, max_length);
        input.set_parent_path(parent_path);
        input.set_allowed_regions(config.allowed_regions.clone())?;
        if config.allowed_regions.is_empty() {
            input.set_expected_regions(config.expected_regions.clone())?;
        }
        input
            .set_output_format(config.output_format)
            .set_output_format_whitespaces(config.output_format_whitespaces)
            .add_rule(Rule::PhoneNumber {
                message: NUMBER_NOT_VALID_MESSAGE.to_owned(),
            });
        if let Some(regex) = &config.regex {
            input.add_pattern_rule(regex, NUMBER_NOT_VALID_MESSAGE)?;
        }

        let mut region_code = HiddenField::new(&region_code_field_name(name));
        region_code.set_parent_path(parent_path);

        debug!("Created phone field {} with companion {}", input.html_name(), region_code.html_name());
        Ok((input, region_code))
    }
}
