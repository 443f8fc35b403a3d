pub struct RegionCode {
}

impl RegionCode {
    pub fn cz() -> &'static str {
        "CZ"
    }

    pub fn sk() -> &'static str {
        "SK"
    }

    /// Regions a field expects when nothing else was configured.
    pub fn default_expected() -> [&'static str; 2] {
        [Self::cz(), Self::sk()]
    }
}
