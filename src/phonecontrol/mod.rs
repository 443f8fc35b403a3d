pub(crate) mod helper_constants;
mod helper_functions;
mod helper_types;
pub mod errors;
pub mod enums;
pub mod config;
pub mod rules;
mod phone_control;
mod hidden_field;
mod factory;

pub use enums::{OutputFormat, PhoneNumberFormat, PhoneValue};
pub use helper_constants::{DEFAULT_REGEX, NUMBER_NOT_VALID_MESSAGE, REGION_CODE_SUFFIX};
pub use helper_functions::region_code_field_name;
pub use helper_types::RegionList;
pub use phone_control::PhoneControl;
pub use hidden_field::HiddenField;
pub use factory::PhoneControlFactory;
pub use config::PhoneControlConfig;
