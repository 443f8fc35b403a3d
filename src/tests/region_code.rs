use std::collections::HashSet;

use crate::i18n::{
    calling_codes::{supported_regions, CALLING_CODES},
    calling_codes_for, is_supported_region, CallingCodes, RegionCode,
};

#[test]
fn table_is_sorted_for_binary_search() {
    let regions: Vec<&str> = supported_regions().collect();
    let mut sorted = regions.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(regions, sorted);
}

#[test]
fn every_key_is_unique_and_every_code_numeric() {
    let mut keys = HashSet::new();
    for (region, calling_codes) in CALLING_CODES {
        if let CallingCodes::Group(entries) = calling_codes {
            assert!(!entries.is_empty(), "empty group for {}", region);
            assert_eq!(entries[0].0, *region, "first group key of {}", region);
        }
        for (key, code) in calling_codes.entries(region) {
            assert!(keys.insert(key.to_owned()), "duplicate key {}", key);
            assert!(!code.is_empty() && code.chars().all(|c| c.is_ascii_digit()), "{}", key);
        }
    }
}

#[test]
fn looks_up_single_codes() {
    assert_eq!(calling_codes_for(RegionCode::cz()), Some(&CallingCodes::Single("420")));
    assert_eq!(calling_codes_for(RegionCode::sk()), Some(&CallingCodes::Single("421")));
    assert_eq!(calling_codes_for("US"), Some(&CallingCodes::Single("1")));
    assert!(is_supported_region("AC"));
    assert!(is_supported_region("ZW"));
}

#[test]
fn groups_expand_to_all_prefixes() {
    let dominican = calling_codes_for("DO").unwrap();
    assert_eq!(
        dominican.entries("DO").collect::<Vec<_>>(),
        vec![("DO", "1809"), ("DO2", "1829"), ("DO3", "1849")]
    );

    let czech = calling_codes_for("CZ").unwrap();
    assert_eq!(czech.entries("CZ").collect::<Vec<_>>(), vec![("CZ", "420")]);
}

#[test]
fn rejects_unknown_regions() {
    assert!(!is_supported_region("XX"));
    assert!(!is_supported_region("ZZ"));
    assert!(!is_supported_region("cz"));
    assert!(!is_supported_region(""));
}
