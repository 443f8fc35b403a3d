// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Calling code(s) a region is dialled through.
///
/// Most regions own exactly one calling code. A few NANPA members are reached
/// through several area prefixes; those are stored as a group of
/// `(key, calling code)` entries where every key is unique across the table,
/// so the group can be merged into a single region → code mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallingCodes {
    Single(&'static str),
    Group(&'static [(&'static str, &'static str)]),
}

impl CallingCodes {
    /// Iterates `(key, calling code)` pairs. For [`CallingCodes::Single`] the key
    /// is the region code itself.
    pub fn entries<'a>(
        &'a self,
        region_code: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'static str)> + 'a {
        let (single, group) = match self {
            CallingCodes::Single(code) => (Some((region_code, *code)), None),
            CallingCodes::Group(entries) => (None, Some(entries.iter().map(|(k, v)| (*k, *v)))),
        };
        single.into_iter().chain(group.into_iter().flatten())
    }
}

use CallingCodes::{Group, Single};

/// Region code → calling code table. Sorted by region code, looked up with a
/// binary search.
pub(crate) static CALLING_CODES: &[(&str, CallingCodes)] = &[
    ("AC", Single("247")),
    ("AD", Single("376")),
    ("AE", Single("971")),
    ("AF", Single("93")),
    ("AG", Single("1268")),
    ("AI", Single("1264")),
    ("AL", Single("355")),
    ("AM", Single("374")),
    ("AO", Single("244")),
    ("AR", Single("54")),
    ("AS", Single("1684")),
    ("AT", Single("43")),
    ("AU", Single("61")),
    ("AW", Single("297")),
    ("AX", Single("358")),
    ("AZ", Single("994")),
    ("BA", Single("387")),
    ("BB", Single("1246")),
    ("BD", Single("880")),
    ("BE", Single("32")),
    ("BF", Single("226")),
    ("BG", Single("359")),
    ("BH", Single("973")),
    ("BI", Single("257")),
    ("BJ", Single("229")),
    ("BL", Single("590")),
    ("BM", Single("1441")),
    ("BN", Single("673")),
    ("BO", Single("591")),
    ("BQ", Single("599")),
    ("BR", Single("55")),
    ("BS", Single("1242")),
    ("BT", Single("975")),
    ("BW", Single("267")),
    ("BY", Single("375")),
    ("BZ", Single("501")),
    ("CA", Single("1")),
    ("CC", Single("61")),
    ("CD", Single("243")),
    ("CF", Single("236")),
    ("CG", Single("242")),
    ("CH", Single("41")),
    ("CI", Single("225")),
    ("CK", Single("682")),
    ("CL", Single("56")),
    ("CM", Single("237")),
    ("CN", Single("86")),
    ("CO", Single("57")),
    ("CR", Single("506")),
    ("CU", Single("53")),
    ("CV", Single("238")),
    ("CW", Single("599")),
    ("CX", Single("61")),
    ("CY", Single("357")),
    ("CZ", Single("420")),
    ("DE", Single("49")),
    ("DJ", Single("253")),
    ("DK", Single("45")),
    ("DM", Single("1767")),
    ("DO", Group(&[("DO", "1809"), ("DO2", "1829"), ("DO3", "1849")])),
    ("DZ", Single("213")),
    ("EC", Single("593")),
    ("EE", Single("372")),
    ("EG", Single("20")),
    ("EH", Single("212")),
    ("ER", Single("291")),
    ("ES", Single("34")),
    ("ET", Single("251")),
    ("FI", Single("358")),
    ("FJ", Single("679")),
    ("FK", Single("500")),
    ("FM", Single("691")),
    ("FO", Single("298")),
    ("FR", Single("33")),
    ("GA", Single("241")),
    ("GB", Single("44")),
    ("GD", Single("1473")),
    ("GE", Single("995")),
    ("GF", Single("594")),
    ("GG", Single("44")),
    ("GH", Single("233")),
    ("GI", Single("350")),
    ("GL", Single("299")),
    ("GM", Single("220")),
    ("GN", Single("224")),
    ("GP", Single("590")),
    ("GQ", Single("240")),
    ("GR", Single("30")),
    ("GT", Single("502")),
    ("GU", Single("1671")),
    ("GW", Single("245")),
    ("GY", Single("592")),
    ("HK", Single("852")),
    ("HN", Single("504")),
    ("HR", Single("385")),
    ("HT", Single("509")),
    ("HU", Single("36")),
    ("ID", Single("62")),
    ("IE", Single("353")),
    ("IL", Single("972")),
    ("IM", Single("44")),
    ("IN", Single("91")),
    ("IO", Single("246")),
    ("IQ", Single("964")),
    ("IR", Single("98")),
    ("IS", Single("354")),
    ("IT", Single("39")),
    ("JE", Single("44")),
    ("JM", Group(&[("JM", "1876"), ("JM2", "1658")])),
    ("JO", Single("962")),
    ("JP", Single("81")),
    ("KE", Single("254")),
    ("KG", Single("996")),
    ("KH", Single("855")),
    ("KI", Single("686")),
    ("KM", Single("269")),
    ("KN", Single("1869")),
    ("KP", Single("850")),
    ("KR", Single("82")),
    ("KW", Single("965")),
    ("KY", Single("1345")),
    ("KZ", Single("7")),
    ("LA", Single("856")),
    ("LB", Single("961")),
    ("LC", Single("1758")),
    ("LI", Single("423")),
    ("LK", Single("94")),
    ("LR", Single("231")),
    ("LS", Single("266")),
    ("LT", Single("370")),
    ("LU", Single("352")),
    ("LV", Single("371")),
    ("LY", Single("218")),
    ("MA", Single("212")),
    ("MC", Single("377")),
    ("MD", Single("373")),
    ("ME", Single("382")),
    ("MF", Single("590")),
    ("MG", Single("261")),
    ("MH", Single("692")),
    ("MK", Single("389")),
    ("ML", Single("223")),
    ("MM", Single("95")),
    ("MN", Single("976")),
    ("MO", Single("853")),
    ("MP", Single("1670")),
    ("MQ", Single("596")),
    ("MR", Single("222")),
    ("MS", Single("1664")),
    ("MT", Single("356")),
    ("MU", Single("230")),
    ("MV", Single("960")),
    ("MW", Single("265")),
    ("MX", Single("52")),
    ("MY", Single("60")),
    ("MZ", Single("258")),
    ("NA", Single("264")),
    ("NC", Single("687")),
    ("NE", Single("227")),
    ("NF", Single("672")),
    ("NG", Single("234")),
    ("NI", Single("505")),
    ("NL", Single("31")),
    ("NO", Single("47")),
    ("NP", Single("977")),
    ("NR", Single("674")),
    ("NU", Single("683")),
    ("NZ", Single("64")),
    ("OM", Single("968")),
    ("PA", Single("507")),
    ("PE", Single("51")),
    ("PF", Single("689")),
    ("PG", Single("675")),
    ("PH", Single("63")),
    ("PK", Single("92")),
    ("PL", Single("48")),
    ("PM", Single("508")),
    ("PR", Group(&[("PR", "1787"), ("PR2", "1939")])),
    ("PS", Single("970")),
    ("PT", Single("351")),
    ("PW", Single("680")),
    ("PY", Single("595")),
    ("QA", Single("974")),
    ("RE", Single("262")),
    ("RO", Single("40")),
    ("RS", Single("381")),
    ("RU", Single("7")),
    ("RW", Single("250")),
    ("SA", Single("966")),
    ("SB", Single("677")),
    ("SC", Single("248")),
    ("SD", Single("249")),
    ("SE", Single("46")),
    ("SG", Single("65")),
    ("SH", Single("290")),
    ("SI", Single("386")),
    ("SJ", Single("47")),
    ("SK", Single("421")),
    ("SL", Single("232")),
    ("SM", Single("378")),
    ("SN", Single("221")),
    ("SO", Single("252")),
    ("SR", Single("597")),
    ("SS", Single("211")),
    ("ST", Single("239")),
    ("SV", Single("503")),
    ("SX", Single("1721")),
    ("SY", Single("963")),
    ("SZ", Single("268")),
    ("TA", Single("290")),
    ("TC", Single("1649")),
    ("TD", Single("235")),
    ("TG", Single("228")),
    ("TH", Single("66")),
    ("TJ", Single("992")),
    ("TK", Single("690")),
    ("TL", Single("670")),
    ("TM", Single("993")),
    ("TN", Single("216")),
    ("TO", Single("676")),
    ("TR", Single("90")),
    ("TT", Single("1868")),
    ("TV", Single("688")),
    ("TW", Single("886")),
    ("TZ", Single("255")),
    ("UA", Single("380")),
    ("UG", Single("256")),
    ("US", Single("1")),
    ("UY", Single("598")),
    ("UZ", Single("998")),
    ("VA", Single("39")),
    ("VC", Single("1784")),
    ("VE", Single("58")),
    ("VG", Single("1284")),
    ("VI", Single("1340")),
    ("VN", Single("84")),
    ("VU", Single("678")),
    ("WF", Single("681")),
    ("WS", Single("685")),
    ("XK", Single("383")),
    ("YE", Single("967")),
    ("YT", Single("262")),
    ("ZA", Single("27")),
    ("ZM", Single("260")),
    ("ZW", Single("263")),
];

/// Returns calling code(s) of the region or `None` when the region is not
/// in the table.
pub fn calling_codes_for(region_code: &str) -> Option<&'static CallingCodes> {
    CALLING_CODES
        .binary_search_by_key(&region_code, |(region, _)| *region)
        .ok()
        .map(|index| &CALLING_CODES[index].1)
}

pub fn is_supported_region(region_code: &str) -> bool {
    calling_codes_for(region_code).is_some()
}

/// All region codes present in the table, in table order.
pub fn supported_regions() -> impl Iterator<Item = &'static str> {
    CALLING_CODES.iter().map(|(region, _)| *region)
}
