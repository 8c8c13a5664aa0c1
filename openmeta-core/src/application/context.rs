// openmeta-core/src/application/context.rs
//
// Wiring between a connector and its exchange services. The context manager
// builds one service per family it has a client for; the connector keeps the
// resulting IntegrationContext in a ContextSlot until it is disconnected.

use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::application::connection::ConnectionExchangeService;
use crate::application::exchange::ExchangeContext;
use crate::application::glossary::GlossaryExchangeService;
use crate::application::governance::OpenMetadataGovernanceService;
use crate::application::infrastructure::InfrastructureExchangeService;
use crate::application::lineage::LineageExchangeService;
use crate::application::stewardship::StewardshipExchangeService;
use crate::domain::connector::ConnectorConfig;
use crate::domain::error::DomainError;
use crate::domain::family::ExchangeFamily;
use crate::domain::synchronization::PermittedSynchronization;
use crate::ports::{
    ConnectionExchangeClient, GlossaryExchangeClient, InfrastructureExchangeClient,
    LineageExchangeClient, OpenMetadataStoreClient, StewardshipExchangeClient,
};

/// Holds a connector's context once the context manager has handed it over.
pub struct ContextSlot<C> {
    connector_name: String,
    context: Option<C>,
}

impl<C> ContextSlot<C> {
    pub fn new(connector_name: impl Into<String>) -> Self {
        Self {
            connector_name: connector_name.into(),
            context: None,
        }
    }

    pub fn set(&mut self, context: C) {
        self.context = Some(context);
    }

    pub fn is_set(&self) -> bool {
        self.context.is_some()
    }

    pub fn get(&self) -> Result<&C, DomainError> {
        self.context
            .as_ref()
            .ok_or_else(|| not_initialized(&self.connector_name))
    }

    pub fn get_mut(&mut self) -> Result<&mut C, DomainError> {
        let Self {
            connector_name,
            context,
        } = self;
        context.as_mut().ok_or_else(|| not_initialized(connector_name))
    }

    /// Empties the slot, returning the context it held.
    pub fn take(&mut self) -> Option<C> {
        self.context.take()
    }
}

fn not_initialized(connector_name: &str) -> DomainError {
    error!(
        connector = %connector_name,
        "Integration context requested before it was set"
    );
    DomainError::ContextNotInitialized {
        connector_name: connector_name.to_string(),
    }
}

/// One optional remote client per family.
#[derive(Clone, Default)]
pub struct ExchangeClients {
    pub connection: Option<Arc<dyn ConnectionExchangeClient>>,
    pub glossary: Option<Arc<dyn GlossaryExchangeClient>>,
    pub lineage: Option<Arc<dyn LineageExchangeClient>>,
    pub stewardship: Option<Arc<dyn StewardshipExchangeClient>>,
    pub infrastructure: Option<Arc<dyn InfrastructureExchangeClient>>,
    pub governance: Option<Arc<dyn OpenMetadataStoreClient>>,
}

impl ExchangeClients {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_connection(mut self, client: Arc<dyn ConnectionExchangeClient>) -> Self {
        self.connection = Some(client);
        self
    }

    pub fn with_glossary(mut self, client: Arc<dyn GlossaryExchangeClient>) -> Self {
        self.glossary = Some(client);
        self
    }

    pub fn with_lineage(mut self, client: Arc<dyn LineageExchangeClient>) -> Self {
        self.lineage = Some(client);
        self
    }

    pub fn with_stewardship(mut self, client: Arc<dyn StewardshipExchangeClient>) -> Self {
        self.stewardship = Some(client);
        self
    }

    pub fn with_infrastructure(mut self, client: Arc<dyn InfrastructureExchangeClient>) -> Self {
        self.infrastructure = Some(client);
        self
    }

    pub fn with_governance(mut self, client: Arc<dyn OpenMetadataStoreClient>) -> Self {
        self.governance = Some(client);
        self
    }

    pub fn families(&self) -> Vec<ExchangeFamily> {
        let present = [
            self.connection.is_some(),
            self.glossary.is_some(),
            self.lineage.is_some(),
            self.stewardship.is_some(),
            self.infrastructure.is_some(),
            self.governance.is_some(),
        ];
        ExchangeFamily::ALL
            .into_iter()
            .zip(present)
            .filter_map(|(family, is_present)| is_present.then_some(family))
            .collect()
    }
}

/// Everything a connector may call, grouped by family.
///
/// Each service carries its own copy of the exchange context, so retrieval
/// flags set on one family do not leak into another.
pub struct IntegrationContext {
    connector_name: String,
    permitted_synchronization: PermittedSynchronization,
    connection: Option<ConnectionExchangeService>,
    glossary: Option<GlossaryExchangeService>,
    lineage: Option<LineageExchangeService>,
    stewardship: Option<StewardshipExchangeService>,
    infrastructure: Option<InfrastructureExchangeService>,
    governance: Option<OpenMetadataGovernanceService>,
}

fn configured<S>(service: Option<S>, family: ExchangeFamily) -> Result<S, DomainError> {
    service.ok_or(DomainError::ServiceNotConfigured { family })
}

impl IntegrationContext {
    pub fn connector_name(&self) -> &str {
        &self.connector_name
    }

    pub fn permitted_synchronization(&self) -> PermittedSynchronization {
        self.permitted_synchronization
    }

    pub fn connection(&self) -> Result<&ConnectionExchangeService, DomainError> {
        configured(self.connection.as_ref(), ExchangeFamily::Connection)
    }

    pub fn connection_mut(&mut self) -> Result<&mut ConnectionExchangeService, DomainError> {
        configured(self.connection.as_mut(), ExchangeFamily::Connection)
    }

    pub fn glossary(&self) -> Result<&GlossaryExchangeService, DomainError> {
        configured(self.glossary.as_ref(), ExchangeFamily::Glossary)
    }

    pub fn glossary_mut(&mut self) -> Result<&mut GlossaryExchangeService, DomainError> {
        configured(self.glossary.as_mut(), ExchangeFamily::Glossary)
    }

    pub fn lineage(&self) -> Result<&LineageExchangeService, DomainError> {
        configured(self.lineage.as_ref(), ExchangeFamily::Lineage)
    }

    pub fn lineage_mut(&mut self) -> Result<&mut LineageExchangeService, DomainError> {
        configured(self.lineage.as_mut(), ExchangeFamily::Lineage)
    }

    pub fn stewardship(&self) -> Result<&StewardshipExchangeService, DomainError> {
        configured(self.stewardship.as_ref(), ExchangeFamily::Stewardship)
    }

    pub fn stewardship_mut(&mut self) -> Result<&mut StewardshipExchangeService, DomainError> {
        configured(self.stewardship.as_mut(), ExchangeFamily::Stewardship)
    }

    pub fn infrastructure(&self) -> Result<&InfrastructureExchangeService, DomainError> {
        configured(self.infrastructure.as_ref(), ExchangeFamily::Infrastructure)
    }

    pub fn infrastructure_mut(
        &mut self,
    ) -> Result<&mut InfrastructureExchangeService, DomainError> {
        configured(self.infrastructure.as_mut(), ExchangeFamily::Infrastructure)
    }

    pub fn governance(&self) -> Result<&OpenMetadataGovernanceService, DomainError> {
        configured(self.governance.as_ref(), ExchangeFamily::Governance)
    }

    pub fn governance_mut(&mut self) -> Result<&mut OpenMetadataGovernanceService, DomainError> {
        configured(self.governance.as_mut(), ExchangeFamily::Governance)
    }
}

pub struct ContextManager {
    config: ConnectorConfig,
    clients: ExchangeClients,
}

impl ContextManager {
    pub fn new(config: ConnectorConfig, clients: ExchangeClients) -> Self {
        Self { config, clients }
    }

    pub fn config(&self) -> &ConnectorConfig {
        &self.config
    }

    #[instrument(skip(self), fields(connector = %self.config.connector_name))]
    pub fn create_context(&self) -> IntegrationContext {
        let exchange = || ExchangeContext::from_config(&self.config);
        let clients = &self.clients;

        info!(
            policy = %self.config.permitted_synchronization,
            families = ?clients.families(),
            "Wiring integration context"
        );

        IntegrationContext {
            connector_name: self.config.connector_name.clone(),
            permitted_synchronization: self.config.permitted_synchronization,
            connection: clients
                .connection
                .clone()
                .map(|c| ConnectionExchangeService::new(c, exchange())),
            glossary: clients
                .glossary
                .clone()
                .map(|c| GlossaryExchangeService::new(c, exchange())),
            lineage: clients
                .lineage
                .clone()
                .map(|c| LineageExchangeService::new(c, exchange())),
            stewardship: clients
                .stewardship
                .clone()
                .map(|c| StewardshipExchangeService::new(c, exchange())),
            infrastructure: clients
                .infrastructure
                .clone()
                .map(|c| InfrastructureExchangeService::new(c, exchange())),
            governance: clients
                .governance
                .clone()
                .map(|c| OpenMetadataGovernanceService::new(c, exchange())),
        }
    }
}
