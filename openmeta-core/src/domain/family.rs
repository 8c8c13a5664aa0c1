// openmeta-core/src/domain/family.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::DomainError;

/// Entity families, each served by its own exchange service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExchangeFamily {
    Connection,
    Glossary,
    Lineage,
    Stewardship,
    Infrastructure,
    Governance,
}

impl ExchangeFamily {
    pub const ALL: [ExchangeFamily; 6] = [
        Self::Connection,
        Self::Glossary,
        Self::Lineage,
        Self::Stewardship,
        Self::Infrastructure,
        Self::Governance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connection => "connection",
            Self::Glossary => "glossary",
            Self::Lineage => "lineage",
            Self::Stewardship => "stewardship",
            Self::Infrastructure => "infrastructure",
            Self::Governance => "governance",
        }
    }

    pub fn service_name(&self) -> &'static str {
        match self {
            Self::Connection => "ConnectionExchangeService",
            Self::Glossary => "GlossaryExchangeService",
            Self::Lineage => "LineageExchangeService",
            Self::Stewardship => "StewardshipExchangeService",
            Self::Infrastructure => "InfrastructureExchangeService",
            Self::Governance => "OpenMetadataGovernanceService",
        }
    }
}

impl fmt::Display for ExchangeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ExchangeFamily {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == wanted)
            .ok_or_else(|| DomainError::UnknownFamily(s.to_string()))
    }
}
