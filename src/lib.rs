mod interfaces;
mod numbering_plan;
mod regexp_cache;
pub mod i18n;
pub mod forms;
pub mod phonecontrol;
pub mod client;
pub(crate) mod string_util;

/// Helpers for the `Cow`-returning string functions.
mod macros;

#[cfg(test)]
mod tests;

pub use interfaces::NumberingPlan;
pub use numbering_plan::{PhoneNumberCrateBackend, NUMBERING_PLAN};
pub use regexp_cache::{InvalidRegexError, RegexCache};
pub use phonecontrol::{
    errors::{ConfigError, FieldError, InvalidNumberError},
    HiddenField, OutputFormat, PhoneControl, PhoneControlConfig, PhoneControlFactory,
    PhoneNumberFormat, PhoneValue, RegionList,
};
pub use phonenumber::PhoneNumber;
