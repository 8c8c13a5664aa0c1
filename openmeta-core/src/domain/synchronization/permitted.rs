// openmeta-core/src/domain/synchronization/permitted.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::DomainError;

/// Direction in which an integration connector may exchange metadata with the
/// third party technology it is paired with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PermittedSynchronization {
    #[default]
    BothDirections,
    /// Open metadata is pushed out to the third party only.
    ToThirdParty,
    /// Third party metadata is catalogued into open metadata only.
    FromThirdParty,
}

impl PermittedSynchronization {
    pub const ALL: [PermittedSynchronization; 3] = [
        Self::BothDirections,
        Self::ToThirdParty,
        Self::FromThirdParty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BothDirections => "both_directions",
            Self::ToThirdParty => "to_third_party",
            Self::FromThirdParty => "from_third_party",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::BothDirections => "Metadata exchange is permitted in both directions",
            Self::ToThirdParty => "Metadata may only flow from open metadata to the third party",
            Self::FromThirdParty => "Metadata may only flow from the third party to open metadata",
        }
    }
}

impl fmt::Display for PermittedSynchronization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PermittedSynchronization {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "both_directions" => Ok(Self::BothDirections),
            "to_third_party" => Ok(Self::ToThirdParty),
            "from_third_party" => Ok(Self::FromThirdParty),
            _ => Err(DomainError::UnknownSynchronization(s.to_string())),
        }
    }
}
