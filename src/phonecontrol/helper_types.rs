use serde::Deserialize;

/// One region code or a list of them.
///
/// Config files may write `allowedRegions = "CZ"` as well as
/// `allowedRegions = ["CZ", "SK"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RegionListRepr")]
pub struct RegionList(pub Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum RegionListRepr {
    One(String),
    Many(Vec<String>),
}

impl From<RegionListRepr> for RegionList {
    fn from(value: RegionListRepr) -> Self {
        match value {
            RegionListRepr::One(region) => RegionList(vec![region]),
            RegionListRepr::Many(regions) => RegionList(regions),
        }
    }
}

impl RegionList {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<&str> for RegionList {
    fn from(value: &str) -> Self {
        RegionList(vec![value.to_owned()])
    }
}

impl From<String> for RegionList {
    fn from(value: String) -> Self {
        RegionList(vec![value])
    }
}

impl From<Vec<String>> for RegionList {
    fn from(value: Vec<String>) -> Self {
        RegionList(value)
    }
}

impl From<Vec<&str>> for RegionList {
    fn from(value: Vec<&str>) -> Self {
        RegionList(value.into_iter().map(str::to_owned).collect())
    }
}

impl From<&[&str]> for RegionList {
    fn from(value: &[&str]) -> Self {
        RegionList(value.iter().map(|region| (*region).to_owned()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for RegionList {
    fn from(value: [&str; N]) -> Self {
        RegionList(value.iter().map(|region| (*region).to_owned()).collect())
    }
}
