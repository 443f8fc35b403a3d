// Pre-validation character filter applied to the raw input: an optional
// leading plus followed by digits, spaces, parentheses and hyphens.
pub const DEFAULT_REGEX: &'static str = "^[+]?[0-9 ()-]*$";

pub const NUMBER_NOT_VALID_MESSAGE: &'static str = "Phone number is not valid.";
pub const REQUIRED_MESSAGE: &'static str = "This field is required.";

/// The hidden companion field is named after the phone field plus this suffix.
pub const REGION_CODE_SUFFIX: &'static str = "RegionCode";

/// CSS class the client script looks for.
pub const CONTROL_CLASS: &'static str = "phone-control";
pub const DATA_REGION_CODES: &'static str = "region-codes";
pub const DATA_STRICT: &'static str = "strict";

pub const PLUS_SIGN: &'static str = "+";
pub const HTML_ID_PREFIX: &'static str = "frm";
