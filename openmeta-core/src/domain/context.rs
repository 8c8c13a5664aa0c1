// openmeta-core/src/domain/context.rs

use serde::{Deserialize, Serialize};

/// Identity of the upstream system of record on whose behalf changes are made.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExternalSource {
    pub guid: Option<String>,
    pub name: Option<String>,
}

impl ExternalSource {
    pub fn new(guid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            guid: Some(guid.into()),
            name: Some(name.into()),
        }
    }

    /// Changes are made in the local cohort rather than on behalf of a third party.
    pub fn is_local(&self) -> bool {
        self.guid.is_none() && self.name.is_none()
    }
}

/// Caller identity and retrieval scope attached to every remote call.
///
/// Built fresh from the exchange context for each call, so a flag change only
/// affects calls made after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub user_id: String,
    pub external_source: ExternalSource,
    pub for_lineage: bool,
    pub for_duplicate_processing: bool,
}
