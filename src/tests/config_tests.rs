use std::io::Write as _;

use super::init_logger;
use crate::phonecontrol::{
    errors::ConfigError, OutputFormat, PhoneControlConfig, PhoneControlFactory,
    PhoneNumberFormat, RegionList, DEFAULT_REGEX,
};

#[test]
fn empty_document_uses_defaults() {
    init_logger();
    let config = PhoneControlConfig::from_toml_str("").unwrap();
    assert_eq!(config, PhoneControlConfig::default());
    assert_eq!(config.expected_regions, RegionList::from(["CZ", "SK"]));
    assert_eq!(config.regex.as_deref(), Some(DEFAULT_REGEX));
}

#[test]
fn full_document() {
    init_logger();
    let config = PhoneControlConfig::from_toml_str(
        r#"
        allowedRegions = ["CZ", "SK"]
        expectedRegions = "DE"
        outputFormat = "INTERNATIONAL"
        outputFormatWhitespaces = false
        regex = "[0-9+ ]*"
        "#,
    )
    .unwrap();

    assert_eq!(config.allowed_regions, RegionList::from(["CZ", "SK"]));
    assert_eq!(config.expected_regions, RegionList::from("DE"));
    assert_eq!(
        config.output_format,
        OutputFormat::Standard(PhoneNumberFormat::International)
    );
    assert!(!config.output_format_whitespaces);
    assert_eq!(config.regex.as_deref(), Some("[0-9+ ]*"));
}

#[test]
fn output_format_names_and_codes() {
    let cases = [
        ("\"RAW\"", OutputFormat::Raw),
        ("\"NATIONAL_NUMBER\"", OutputFormat::NationalNumber),
        ("\"PHONE_NUMBER_OBJECT\"", OutputFormat::PhoneNumberObject),
        ("\"RFC3966\"", OutputFormat::Standard(PhoneNumberFormat::RFC3966)),
        ("-1", OutputFormat::Raw),
        ("-2", OutputFormat::NationalNumber),
        ("-3", OutputFormat::PhoneNumberObject),
        ("0", OutputFormat::Standard(PhoneNumberFormat::E164)),
        ("2", OutputFormat::Standard(PhoneNumberFormat::National)),
    ];
    for (source, expected) in cases {
        let config = PhoneControlConfig::from_toml_str(&format!("outputFormat = {}", source))
            .unwrap_or_else(|err| panic!("{}: {}", source, err));
        assert_eq!(config.output_format, expected, "outputFormat = {}", source);
    }

    assert!(PhoneControlConfig::from_toml_str("outputFormat = \"PRETTY\"").is_err());
    assert!(PhoneControlConfig::from_toml_str("outputFormat = 7").is_err());
}

#[test]
fn regex_switch() {
    let disabled = PhoneControlConfig::from_toml_str("regex = false").unwrap();
    assert_eq!(disabled.regex, None);

    let empty = PhoneControlConfig::from_toml_str("regex = \"\"").unwrap();
    assert_eq!(empty.regex, None);

    let enabled = PhoneControlConfig::from_toml_str("regex = true").unwrap();
    assert_eq!(enabled.regex.as_deref(), Some(DEFAULT_REGEX));
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(matches!(
        PhoneControlConfig::from_toml_str("allowedRegion = \"CZ\""),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn regions_are_checked_by_validate_not_by_parse() {
    let config = PhoneControlConfig::from_toml_str("allowedRegions = [\"CZ\", \"XX\"]").unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::UnsupportedRegion(region)) if region == "XX"
    ));
    assert!(PhoneControlFactory::new(config).is_err());
}

#[test]
fn load_from_file() {
    init_logger();
    let path = std::env::temp_dir().join(format!("phone-control-{}.toml", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "allowedRegions = \"SK\"").unwrap();
    writeln!(file, "outputFormat = \"NATIONAL\"").unwrap();
    drop(file);

    let config = PhoneControlConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(config.allowed_regions, RegionList::from("SK"));
    assert_eq!(
        config.output_format,
        OutputFormat::Standard(PhoneNumberFormat::National)
    );

    let missing = PhoneControlConfig::load(&path).unwrap_err();
    assert!(matches!(missing, ConfigError::Read { .. }));
    assert!(missing.to_string().contains("phone-control-"));
}

#[test]
fn format_names_match_legacy_codes() {
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    for number_format in PhoneNumberFormat::iter() {
        let by_name = OutputFormat::from_str(number_format.as_ref()).unwrap();
        let by_code = OutputFormat::try_from(i64::from(number_format.legacy_code())).unwrap();
        assert_eq!(by_name, by_code);
        assert_eq!(by_name, OutputFormat::Standard(number_format));
    }
}
