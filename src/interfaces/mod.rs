use phonenumber::PhoneNumber;

use crate::phonecontrol::{errors::InvalidNumberError, PhoneNumberFormat};

/// Numbering plan API used by phone fields. Isolates the underlying
/// parsing/validation library so a different implementation can be swapped
/// in easily (tests use this to count calls or fake answers).
pub trait NumberingPlan: Send + Sync {
    /// Parses `number`. `default_region` is used to interpret numbers written
    /// without a leading `+`.
    fn parse(
        &self,
        number: &str,
        default_region: Option<&str>,
    ) -> Result<PhoneNumber, InvalidNumberError>;

    /// Returns whether the number matches a valid pattern of whatever region
    /// it belongs to.
    fn is_valid_number(&self, phone_number: &PhoneNumber) -> bool;

    /// Returns whether the number is valid and belongs to `region_code`.
    fn is_valid_number_for_region(&self, phone_number: &PhoneNumber, region_code: &str) -> bool;

    fn format(&self, phone_number: &PhoneNumber, number_format: PhoneNumberFormat) -> String;

    /// National significant number, including leading zeros (e.g. Italian
    /// fixed lines).
    fn national_significant_number(&self, phone_number: &PhoneNumber) -> String;
}
