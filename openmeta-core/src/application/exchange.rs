// openmeta-core/src/application/exchange.rs
//
// State shared by every exchange service: who is calling, on behalf of which
// external source, under which synchronization policy, with which retrieval flags.

use std::future::Future;

use crate::domain::connector::ConnectorConfig;
use crate::domain::context::{ExternalSource, RequestContext};
use crate::domain::synchronization::{PermittedSynchronization, SynchronizationGuard};
use crate::error::ExchangeError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeContext {
    user_id: String,
    external_source: ExternalSource,
    connector_name: String,
    guard: SynchronizationGuard,
    for_lineage: bool,
    for_duplicate_processing: bool,
}

impl ExchangeContext {
    pub fn new(
        user_id: impl Into<String>,
        external_source: ExternalSource,
        connector_name: impl Into<String>,
        guard: SynchronizationGuard,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            external_source,
            connector_name: connector_name.into(),
            guard,
            for_lineage: false,
            for_duplicate_processing: false,
        }
    }

    pub fn from_config(config: &ConnectorConfig) -> Self {
        let mut context = Self::new(
            config.user_id.clone(),
            config.external_source.clone(),
            config.connector_name.clone(),
            config.guard(),
        );
        context.for_lineage = config.for_lineage;
        context.for_duplicate_processing = config.for_duplicate_processing;
        context
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn external_source(&self) -> &ExternalSource {
        &self.external_source
    }

    pub fn connector_name(&self) -> &str {
        &self.connector_name
    }

    pub fn guard(&self) -> &SynchronizationGuard {
        &self.guard
    }

    pub fn permitted_synchronization(&self) -> PermittedSynchronization {
        self.guard.permitted()
    }

    pub fn for_lineage(&self) -> bool {
        self.for_lineage
    }

    pub fn set_for_lineage(&mut self, for_lineage: bool) {
        self.for_lineage = for_lineage;
    }

    pub fn for_duplicate_processing(&self) -> bool {
        self.for_duplicate_processing
    }

    pub fn set_for_duplicate_processing(&mut self, for_duplicate_processing: bool) {
        self.for_duplicate_processing = for_duplicate_processing;
    }

    /// Snapshot of identity and retrieval flags for one remote call.
    pub fn request(&self) -> RequestContext {
        RequestContext {
            user_id: self.user_id.clone(),
            external_source: self.external_source.clone(),
            for_lineage: self.for_lineage,
            for_duplicate_processing: self.for_duplicate_processing,
        }
    }

    /// Guarded forward for mutating calls.
    ///
    /// The guard runs first; `call` is only invoked (and the remote client only
    /// reached) when the policy allows it. Whatever `call` returns is handed back
    /// as is.
    pub async fn forward<T, F, Fut>(&self, method_name: &str, call: F) -> Result<T, ExchangeError>
    where
        F: FnOnce(RequestContext) -> Fut,
        Fut: Future<Output = Result<T, ExchangeError>>,
    {
        self.guard.check(&self.connector_name, method_name)?;
        call(self.request()).await
    }
}

/// Accessors common to all exchange services.
pub trait ExchangeService {
    fn exchange_context(&self) -> &ExchangeContext;

    fn exchange_context_mut(&mut self) -> &mut ExchangeContext;

    fn permitted_synchronization(&self) -> PermittedSynchronization {
        self.exchange_context().permitted_synchronization()
    }

    fn is_for_lineage(&self) -> bool {
        self.exchange_context().for_lineage()
    }

    /// Applies to every call made after this one.
    fn set_for_lineage(&mut self, for_lineage: bool) {
        self.exchange_context_mut().set_for_lineage(for_lineage);
    }

    fn is_for_duplicate_processing(&self) -> bool {
        self.exchange_context().for_duplicate_processing()
    }

    /// Applies to every call made after this one.
    fn set_for_duplicate_processing(&mut self, for_duplicate_processing: bool) {
        self.exchange_context_mut()
            .set_for_duplicate_processing(for_duplicate_processing);
    }
}
