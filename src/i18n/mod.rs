mod region_code;
pub mod calling_codes;

pub use region_code::RegionCode;
pub use calling_codes::{CallingCodes, calling_codes_for, is_supported_region};
