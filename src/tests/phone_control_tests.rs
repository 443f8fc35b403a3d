use std::sync::Mutex;

use phonenumber::PhoneNumber;

use super::init_logger;
use crate::{
    interfaces::NumberingPlan,
    numbering_plan::NUMBERING_PLAN,
    phonecontrol::{
        errors::{ConfigError, InvalidNumberError},
        OutputFormat, PhoneControl, PhoneNumberFormat, PhoneValue,
    },
};

fn get_phone_control() -> PhoneControl {
    init_logger();
    PhoneControl::new("phone", Some("Phone"), None)
}

fn text(value: Result<Option<PhoneValue>, InvalidNumberError>) -> String {
    match value {
        Ok(Some(PhoneValue::Text(text))) => text,
        other => panic!("expected text value, got {:?}", other),
    }
}

/// Delegates to the real numbering plan and records every parse attempt.
#[derive(Default)]
struct RecordingPlan {
    attempts: Mutex<Vec<Option<String>>>,
}

impl RecordingPlan {
    fn leaked() -> &'static RecordingPlan {
        Box::leak(Box::new(RecordingPlan::default()))
    }

    fn attempts(&self) -> Vec<Option<String>> {
        self.attempts.lock().unwrap().clone()
    }
}

impl NumberingPlan for RecordingPlan {
    fn parse(
        &self,
        number: &str,
        default_region: Option<&str>,
    ) -> Result<PhoneNumber, InvalidNumberError> {
        self.attempts.lock().unwrap().push(default_region.map(str::to_owned));
        NUMBERING_PLAN.parse(number, default_region)
    }

    fn is_valid_number(&self, phone_number: &PhoneNumber) -> bool {
        NUMBERING_PLAN.is_valid_number(phone_number)
    }

    fn is_valid_number_for_region(&self, phone_number: &PhoneNumber, region_code: &str) -> bool {
        NUMBERING_PLAN.is_valid_number_for_region(phone_number, region_code)
    }

    fn format(&self, phone_number: &PhoneNumber, number_format: PhoneNumberFormat) -> String {
        NUMBERING_PLAN.format(phone_number, number_format)
    }

    fn national_significant_number(&self, phone_number: &PhoneNumber) -> String {
        NUMBERING_PLAN.national_significant_number(phone_number)
    }
}

#[test]
fn empty_optional_value() {
    let mut control = get_phone_control();
    control.set_allowed_regions("CZ").unwrap();
    control.set_value("   ");

    assert!(matches!(control.get_value(), Ok(None)));
    assert!(control.validate_number());
    assert!(control.validate_allowed_regions());
    assert!(control.validate().is_ok());
}

#[test]
fn empty_required_value() {
    let mut control = get_phone_control();
    control.make_required();

    let err = control.validate().unwrap_err();
    assert_eq!(err.field, "phone");
    assert_eq!(err.message, "This field is required.");
    assert!(!control.validate_number());
}

#[test]
fn international_number_without_regions() {
    let mut control = get_phone_control();
    control.set_value("+420601123456");

    assert!(control.validate_number());
    assert_eq!(text(control.get_value()), "+420601123456");
}

#[test]
fn allow_list_rejects_other_regions() {
    let mut control = get_phone_control();
    control.set_allowed_regions("CZ").unwrap();
    control.set_value("+421 905 123 456");

    assert!(!control.validate_allowed_regions());
    assert!(!control.validate_number());

    control.set_allowed_regions(["CZ", "SK"]).unwrap();
    assert!(control.validate_number());
    assert_eq!(text(control.get_value()), "+421905123456");
}

#[test]
fn allowed_regions_become_expected() {
    let mut control = get_phone_control();
    control.set_expected_regions(["SK"]).unwrap();
    control.set_allowed_regions(["CZ"]).unwrap();

    assert_eq!(control.allowed_regions(), ["CZ"]);
    assert_eq!(control.expected_regions(), ["CZ"]);
}

#[test]
fn unsupported_region_is_a_config_error() {
    let mut control = get_phone_control();
    let err = control.set_allowed_regions("XX").unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedRegion(ref region) if region == "XX"));
    assert_eq!(err.to_string(), "Region XX is not supported.");

    assert!(control.set_expected_regions(["CZ", "XX"]).is_err());
    assert!(control.allowed_regions().is_empty());
    assert!(control.expected_regions().is_empty());
}

#[test]
fn region_code_is_prepended() {
    let mut control = get_phone_control();
    control.set_value("601 123 456").set_region_code(Some("+420"));
    assert_eq!(control.phone_with_region_code(), "+420 601 123 456");
    assert!(control.validate_number());
    assert_eq!(text(control.get_value()), "+420601123456");

    // a number with its own calling code ignores the selected one
    control.set_value("+421 905 123 456");
    assert_eq!(control.phone_with_region_code(), "+421 905 123 456");

    control.set_value("601 123 456").set_region_code(Some("  "));
    assert_eq!(control.region_code(), None);
    assert_eq!(control.phone_with_region_code(), "601 123 456");
}

#[test]
fn expected_regions_interpret_national_numbers() {
    let mut control = get_phone_control();
    control.set_expected_regions(["CZ", "SK"]).unwrap();

    control.set_value("601 123 456");
    assert!(control.validate_number());
    assert_eq!(text(control.get_value()), "+420601123456");

    // leading zero is the Slovak trunk prefix and no Czech number starts with it
    control.set_value("0905 123 456");
    assert!(control.validate_number());
    assert_eq!(text(control.get_value()), "+421905123456");
}

#[test]
fn national_number_without_whitespace() {
    let mut control = get_phone_control();
    control
        .set_output_format(OutputFormat::NationalNumber)
        .set_output_format_whitespaces(false)
        .set_value("+420 601 123 456");

    let value = text(control.get_value());
    assert_eq!(value, "601123456");
    assert!(value.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn standard_formats() {
    let mut control = get_phone_control();
    control.set_value("+420 601 123 456");

    control.set_output_format(PhoneNumberFormat::International);
    assert_eq!(text(control.get_value()), "+420 601 123 456");

    control.set_output_format_whitespaces(false);
    assert_eq!(text(control.get_value()), "+420601123456");

    control
        .set_output_format_whitespaces(true)
        .set_output_format(PhoneNumberFormat::National);
    assert_eq!(text(control.get_value()), "601 123 456");

    control.set_output_format(PhoneNumberFormat::RFC3966);
    assert_eq!(text(control.get_value()), "tel:+420-601-123-456");
}

#[test]
fn raw_output_keeps_input() {
    let mut control = get_phone_control();
    control
        .set_output_format(OutputFormat::Raw)
        .set_value("601 123 456")
        .set_region_code(Some("+420"));
    assert_eq!(text(control.get_value()), "+420 601 123 456");

    control.set_output_format_whitespaces(false);
    assert_eq!(text(control.get_value()), "+420601123456");

    // raw output does not parse
    control.set_value("12");
    assert_eq!(text(control.get_value()), "+42012");

    control.set_value("abc").set_region_code(None);
    assert_eq!(text(control.get_value()), "abc");
}

#[test]
fn phone_number_object_output() {
    let mut control = get_phone_control();
    control
        .set_output_format(OutputFormat::PhoneNumberObject)
        .set_value("+420 601 123 456");

    let value = control.get_value().unwrap().unwrap();
    let number = value.as_number().unwrap();
    assert_eq!(number.code().value(), 420);
    assert_eq!(number.national().value(), 601123456);
    assert_eq!(value.as_str(), None);
}

#[test]
fn unparseable_value() {
    let mut control = get_phone_control();
    control.set_expected_regions(["CZ", "SK"]).unwrap();
    control.set_value("abc");

    assert!(control.get_value().is_err());
    assert!(!control.validate_number());
}

#[test]
fn candidate_regions_are_tried_in_order() {
    let plan = RecordingPlan::leaked();
    let mut control = get_phone_control();
    control
        .set_numbering_plan(plan)
        .set_allowed_regions(["SK", "CZ"])
        .unwrap();
    control.set_value("abc");

    assert!(control.get_value().is_err());
    assert_eq!(
        plan.attempts(),
        vec![Some("SK".to_owned()), Some("CZ".to_owned()), None]
    );
}

#[test]
fn first_matching_region_wins() {
    let plan = RecordingPlan::leaked();
    let mut control = get_phone_control();
    control
        .set_numbering_plan(plan)
        .set_expected_regions(["CZ", "SK"])
        .unwrap();
    control.set_value("601 123 456");

    assert_eq!(text(control.get_value()), "+420601123456");
    assert_eq!(plan.attempts(), vec![Some("CZ".to_owned())]);
}

#[test]
fn rules_run_in_order() {
    let mut control = get_phone_control();
    control.make_required().set_max_length(Some(5));
    control
        .add_pattern_rule("[0-9 ]*", "Only digits.")
        .unwrap();

    control.set_value("601 123 456");
    assert_eq!(
        control.validate().unwrap_err().message,
        "Please enter no more than 5 characters."
    );

    control.set_max_length(None).set_value("601-123");
    assert_eq!(control.validate().unwrap_err().message, "Only digits.");

    control.set_value("601 123");
    assert!(control.validate().is_ok());
}

#[test]
fn invalid_pattern_is_a_config_error() {
    let mut control = get_phone_control();
    assert!(matches!(
        control.add_pattern_rule("[0-9", "broken"),
        Err(ConfigError::InvalidRegex(_))
    ));
}

#[test]
fn renders_region_codes() {
    let mut control = get_phone_control();
    control.set_expected_regions(["CZ", "SK"]).unwrap();
    control.set_value("601 123 456");

    let html = control.get_control();
    assert!(html.has_class("phone-control"));
    assert_eq!(html.get_attribute("type"), Some("tel"));
    assert_eq!(html.get_attribute("name"), Some("phone"));
    assert_eq!(html.get_attribute("id"), Some("frm-phone"));
    assert_eq!(html.get_attribute("value"), Some("601 123 456"));
    assert_eq!(html.get_data("region-codes"), Some(r#"{"CZ":"420","SK":"421"}"#));
    assert_eq!(html.get_data("strict"), Some("0"));

    control.set_allowed_regions(["DO", "CZ"]).unwrap();
    let html = control.get_control();
    assert_eq!(
        html.get_data("region-codes"),
        Some(r#"{"DO":"1809","DO2":"1829","DO3":"1849","CZ":"420"}"#)
    );
    assert_eq!(html.get_data("strict"), Some("1"));
}

#[test]
fn renders_without_regions() {
    let mut control = PhoneControl::new("phone", None, Some(20));
    control.make_required();

    let html = control.get_control();
    assert_eq!(html.get_data("region-codes"), None);
    assert_eq!(html.get_data("strict"), None);
    assert_eq!(html.get_attribute("maxlength"), Some("20"));
    assert_eq!(html.get_attribute("required"), Some(""));
    assert!(control.get_label().is_none());
}

#[test]
fn renders_label() {
    let mut control = get_phone_control();
    control.set_parent_path(&["contact"]);

    let label = control.get_label().unwrap();
    assert_eq!(label.to_string(), r#"<label for="frm-contact-phone">Phone</label>"#);
    assert_eq!(control.html_name(), "contact[phone]");
}
