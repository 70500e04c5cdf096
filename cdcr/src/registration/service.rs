use crate::connector::builder::ConfigBuilder;
use crate::connector::request::RegistrationRequest;
use crate::connector::response::{ListConnectorsResponse, RegistrationResult, STATUS_CREATED};
use crate::connector::status::ConnectorStatus;
use crate::error::{CDCRError, CDCRResult};
use crate::kafka_connect::client::ConnectorClient;
use crate::registration::config::RegistrationConfig;
use chrono::{SecondsFormat, Utc};
use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Duration;

/// Registers, inspects and removes connectors on the connector manager.
///
/// Holds no per-connector state; every call goes to the manager, which is
/// the only serialization point for concurrent registrations of one name.
pub struct RegistrationService {
    client: Arc<dyn ConnectorClient>,
    builder: ConfigBuilder,
    status_check_delay: Duration,
}

impl RegistrationService {
    pub fn new(client: Arc<dyn ConnectorClient>, config: &RegistrationConfig) -> Self {
        RegistrationService {
            client,
            builder: ConfigBuilder::new(config.schema_history_bootstrap_servers.clone()),
            status_check_delay: config.status_check_delay,
        }
    }

    pub async fn register(&self, request: &RegistrationRequest) -> CDCRResult<RegistrationResult> {
        info!(
            "Registering connector {} for {} database {}",
            request.connector_name, request.database_type, request.database_name
        );

        request.validate()?;
        let config = self.builder.build(request)?;

        if self.exists(&config.name).await? {
            return Err(CDCRError::ConflictError(config.name));
        }

        self.client.create(&config).await?;

        tokio::time::sleep(self.status_check_delay).await;
        let status = match self.client.status(&config.name).await {
            Ok(status) => status.connector.state,
            Err(err) => {
                warn!(
                    "Connector {} created but its status is unavailable: {}",
                    config.name, err
                );
                STATUS_CREATED.to_string()
            }
        };

        info!("Connector {} registered ({})", config.name, status);
        Ok(RegistrationResult {
            connector_name: config.name,
            status,
            config: config.config,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        })
    }

    pub async fn list(&self) -> CDCRResult<ListConnectorsResponse> {
        let connectors = self.client.list().await?;
        Ok(ListConnectorsResponse { connectors })
    }

    pub async fn status(&self, name: &str) -> CDCRResult<ConnectorStatus> {
        self.client.status(name).await
    }

    pub async fn delete(&self, name: &str) -> CDCRResult<()> {
        self.client.delete(name).await
    }

    async fn exists(&self, name: &str) -> CDCRResult<bool> {
        let connectors = self.client.list().await?;
        let exists = connectors.iter().any(|connector| connector == name);
        debug!("Connector {} exists: {}", name, exists);
        Ok(exists)
    }
}
