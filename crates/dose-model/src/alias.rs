use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DoseError;

/// How a row's structure columns expand into measure item IDs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AliasMode {
    /// All Structure ID tokens, else the first IDAlias.
    #[default]
    StructureIds,
    /// First IDAlias, else the first Structure ID.
    #[serde(rename = "idalias_first")]
    IdAliasFirst,
    /// All IDAliases, else all Structure IDs.
    #[serde(rename = "idalias_all")]
    IdAliasAll,
    /// Structure IDs followed by IDAliases.
    All,
}

impl AliasMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AliasMode::StructureIds => "structure_ids",
            AliasMode::IdAliasFirst => "idalias_first",
            AliasMode::IdAliasAll => "idalias_all",
            AliasMode::All => "all",
        }
    }
}

impl fmt::Display for AliasMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AliasMode {
    type Err = DoseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "structure_ids" => Ok(AliasMode::StructureIds),
            "idalias_first" => Ok(AliasMode::IdAliasFirst),
            "idalias_all" => Ok(AliasMode::IdAliasAll),
            "all" => Ok(AliasMode::All),
            _ => Err(DoseError::UnknownAliasMode(s.to_string())),
        }
    }
}
