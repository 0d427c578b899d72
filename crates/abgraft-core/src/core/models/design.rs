use super::error::ModelError;
use phf::{Map, phf_map};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the framework is treated once grafts are in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DesignType {
    /// Flexible-backbone design.
    #[default]
    Flxbb,
    /// Fixed-backbone design.
    Fixbb,
    /// Design interleaved with relaxation.
    RelaxedDesign,
}

static DESIGN_TYPE_ALIASES: Map<&'static str, DesignType> = phf_map! {
    "FLXBB" => DesignType::Flxbb,
    "FIXBB" => DesignType::Fixbb,
    "FIXEDBB" => DesignType::Fixbb,
    "RELAXED_DESIGN" => DesignType::RelaxedDesign,
    "RELAX_DESIGN" => DesignType::RelaxedDesign,
    "RELAX_TF" => DesignType::RelaxedDesign,
};

impl DesignType {
    pub fn as_str(self) -> &'static str {
        match self {
            DesignType::Flxbb => "FLXBB",
            DesignType::Fixbb => "FIXBB",
            DesignType::RelaxedDesign => "RELAXED_DESIGN",
        }
    }
}

impl fmt::Display for DesignType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DesignType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DESIGN_TYPE_ALIASES
            .get(s.trim().to_ascii_uppercase().as_str())
            .copied()
            .ok_or_else(|| ModelError::UnknownDesignType(s.to_string()))
    }
}

impl TryFrom<String> for DesignType {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DesignType> for String {
    fn from(design_type: DesignType) -> Self {
        design_type.as_str().to_string()
    }
}
