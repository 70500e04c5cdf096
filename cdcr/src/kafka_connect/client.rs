use crate::connector::config::ConnectorConfig;
use crate::connector::status::ConnectorStatus;
use crate::error::CDCRResult;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

/// The connector manager's REST operations this service relies on.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ConnectorClient: Send + Sync {
    async fn list(&self) -> CDCRResult<Vec<String>>;

    async fn create(&self, config: &ConnectorConfig) -> CDCRResult<()>;

    /// Fails with `NotFoundError` when the manager does not know `name`.
    async fn status(&self, name: &str) -> CDCRResult<ConnectorStatus>;

    /// Succeeds when the connector is already gone.
    async fn delete(&self, name: &str) -> CDCRResult<()>;
}
