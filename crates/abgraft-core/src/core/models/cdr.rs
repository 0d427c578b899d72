use super::error::ModelError;
use phf::{Map, phf_map};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six complementarity-determining regions of an antibody, in canonical order
/// (heavy chain first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CdrName {
    H1,
    H2,
    H3,
    L1,
    L2,
    L3,
}

static CDR_NAMES: Map<&'static str, CdrName> = phf_map! {
    "H1" => CdrName::H1,
    "H2" => CdrName::H2,
    "H3" => CdrName::H3,
    "L1" => CdrName::L1,
    "L2" => CdrName::L2,
    "L3" => CdrName::L3,
};

impl CdrName {
    pub const COUNT: usize = 6;

    pub const ALL: [CdrName; Self::COUNT] = [
        CdrName::H1,
        CdrName::H2,
        CdrName::H3,
        CdrName::L1,
        CdrName::L2,
        CdrName::L3,
    ];

    /// Zero-based position in [`CdrName::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_heavy(self) -> bool {
        matches!(self, CdrName::H1 | CdrName::H2 | CdrName::H3)
    }

    pub fn is_light(self) -> bool {
        !self.is_heavy()
    }

    /// CDRs from `start` to `end` inclusive, in canonical order. Empty if `start > end`.
    pub fn range(start: CdrName, end: CdrName) -> impl Iterator<Item = CdrName> {
        Self::ALL
            .into_iter()
            .filter(move |cdr| (start..=end).contains(cdr))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CdrName::H1 => "H1",
            CdrName::H2 => "H2",
            CdrName::H3 => "H3",
            CdrName::L1 => "L1",
            CdrName::L2 => "L2",
            CdrName::L3 => "L3",
        }
    }
}

impl fmt::Display for CdrName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CdrName {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CDR_NAMES
            .get(s.trim().to_ascii_uppercase().as_str())
            .copied()
            .ok_or_else(|| ModelError::UnknownCdr(s.to_string()))
    }
}

impl TryFrom<String> for CdrName {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CdrName> for String {
    fn from(cdr: CdrName) -> Self {
        cdr.as_str().to_string()
    }
}
