use crate::connector::config::ConnectorConfig;
use crate::connector::kind::DatabaseKind;
use crate::connector::mysql_source::config::MySQLSourceConfig;
use crate::connector::postgres_source::config::PostgresSourceConfig;
use crate::connector::request::RegistrationRequest;
use crate::error::CDCRResult;
use log::{debug, warn};
use std::collections::BTreeMap;

pub const DEFAULT_SCHEMA_HISTORY_BOOTSTRAP_SERVERS: &str = "kafka:9092";

/// Keys a custom transform can still overwrite, but only with a warning.
const STRUCTURAL_KEYS: [&str; 6] = [
    "connector.class",
    "database.hostname",
    "database.port",
    "database.user",
    "database.password",
    "topic.prefix",
];

/// Engine-specific half of a connector configuration.
pub trait SourceProperties {
    fn connector_class(&self) -> &'static str;

    fn properties(&self) -> BTreeMap<String, String>;
}

#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    schema_history_bootstrap_servers: String,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        ConfigBuilder::new(DEFAULT_SCHEMA_HISTORY_BOOTSTRAP_SERVERS)
    }
}

impl ConfigBuilder {
    pub fn new<S>(schema_history_bootstrap_servers: S) -> Self
    where
        S: Into<String>,
    {
        ConfigBuilder {
            schema_history_bootstrap_servers: schema_history_bootstrap_servers.into(),
        }
    }

    pub fn build(&self, request: &RegistrationRequest) -> CDCRResult<ConnectorConfig> {
        let kind = DatabaseKind::parse(&request.database_type)?;
        let source = self.source_for(kind, request);
        let mut config = source.properties();

        if let Some(transforms) = &request.transforms {
            apply_transforms(&request.connector_name, &mut config, transforms);
        }

        Ok(ConnectorConfig::new(request.connector_name.clone(), config))
    }

    fn source_for(
        &self,
        kind: DatabaseKind,
        request: &RegistrationRequest,
    ) -> Box<dyn SourceProperties> {
        match kind {
            DatabaseKind::MySQL => Box::new(MySQLSourceConfig::new(
                request,
                &self.schema_history_bootstrap_servers,
            )),
            DatabaseKind::Postgres => Box::new(PostgresSourceConfig::new(request)),
        }
    }
}

fn apply_transforms(
    connector_name: &str,
    config: &mut BTreeMap<String, String>,
    transforms: &BTreeMap<String, String>,
) {
    for (key, value) in transforms {
        if let Some(previous) = config.insert(key.clone(), value.clone()) {
            if STRUCTURAL_KEYS.contains(&key.as_str()) {
                warn!(
                    "Connector {} overrides '{}' ('{}' -> '{}')",
                    connector_name, key, previous, value
                );
            } else {
                debug!(
                    "Connector {} overrides default '{}' with '{}'",
                    connector_name, key, value
                );
            }
        }
    }
}
