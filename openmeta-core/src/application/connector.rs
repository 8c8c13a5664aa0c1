// openmeta-core/src/application/connector.rs

use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{info, instrument, warn};

use crate::application::context::{ContextManager, IntegrationContext};
use crate::error::ExchangeError;

/// Lifecycle of an integration connector, driven by [`ConnectorRunner`].
///
/// `set_context` is always called before `start`. Implementations normally keep
/// the context in a [`ContextSlot`](crate::application::context::ContextSlot).
#[async_trait]
pub trait IntegrationConnector: Send {
    fn connector_name(&self) -> &str;

    fn set_context(&mut self, context: IntegrationContext);

    async fn start(&mut self) -> Result<(), ExchangeError>;

    /// One synchronization pass between the third party and open metadata.
    async fn refresh(&mut self) -> Result<(), ExchangeError>;

    async fn disconnect(&mut self) -> Result<(), ExchangeError>;
}

pub struct ConnectorRunner {
    manager: ContextManager,
}

impl ConnectorRunner {
    pub fn new(manager: ContextManager) -> Self {
        Self { manager }
    }

    /// Single pass: start, refresh once, disconnect.
    ///
    /// A failed start or refresh still disconnects the connector; the first
    /// error is returned.
    #[instrument(skip_all, fields(connector = %connector.connector_name()))]
    pub async fn run_once<C: IntegrationConnector>(
        &self,
        connector: &mut C,
    ) -> Result<(), ExchangeError> {
        connector.set_context(self.manager.create_context());

        info!("▶️  Starting connector");
        let outcome = match connector.start().await {
            Ok(()) => {
                info!("🔄 Refreshing");
                connector.refresh().await
            }
            Err(e) => Err(e),
        };

        info!("⏹️  Disconnecting connector");
        let disconnected = connector.disconnect().await;
        outcome.and(disconnected)
    }

    /// Refreshes every `refresh_interval_secs` until `shutdown` turns true or
    /// its sender is dropped.
    ///
    /// A receiver that already reads true never starts the connector. A failed
    /// refresh is logged and the next tick tries again.
    #[instrument(skip_all, fields(connector = %connector.connector_name()))]
    pub async fn run<C: IntegrationConnector>(
        &self,
        connector: &mut C,
        mut shutdown: watch::Receiver<bool>,
    ) -> Result<(), ExchangeError> {
        if *shutdown.borrow() {
            info!("Shutdown already requested, connector not started");
            return Ok(());
        }

        let period = Duration::from_secs(self.manager.config().refresh_interval_secs.max(1));
        connector.set_context(self.manager.create_context());

        info!(?period, "▶️  Starting connector");
        if let Err(e) = connector.start().await {
            if let Err(disconnect_error) = connector.disconnect().await {
                warn!(error = %disconnect_error, "Disconnect after failed start also failed");
            }
            return Err(e);
        }

        let mut ticker = tokio::time::interval(period);
        let mut passes: u64 = 0;
        loop {
            if *shutdown.borrow_and_update() {
                break;
            }
            tokio::select! {
                _ = ticker.tick() => {
                    passes += 1;
                    if let Err(e) = connector.refresh().await {
                        warn!(pass = passes, error = %e, "Refresh failed");
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        info!(passes, "⏹️  Disconnecting connector");
        connector.disconnect().await
    }
}
