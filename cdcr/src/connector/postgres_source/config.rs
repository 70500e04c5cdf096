use crate::connector::builder::SourceProperties;
use crate::connector::request::RegistrationRequest;
use crate::connector::tables::format_table_list;
use std::collections::BTreeMap;

pub const POSTGRES_CONNECTOR_CLASS: &str = "io.debezium.connector.postgresql.PostgreSqlConnector";

/// Bare table names are always qualified with this schema; the database name
/// plays no part in the table list.
pub const DEFAULT_SCHEMA: &str = "public";

#[derive(Debug, Clone, PartialEq)]
pub struct PostgresSourceConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub db: String,
    pub password: String,
    pub topic_prefix: String,
    pub tables: Vec<String>,
    pub snapshot_mode: String,
}

impl PostgresSourceConfig {
    pub fn new(request: &RegistrationRequest) -> Self {
        PostgresSourceConfig {
            host: request.database_host.clone(),
            port: request.database_port,
            user: request.username.clone(),
            db: request.database_name.clone(),
            password: request.password.clone(),
            topic_prefix: request.topic_prefix.clone(),
            tables: request.tables.clone(),
            snapshot_mode: request.snapshot_mode().to_string(),
        }
    }
}

impl SourceProperties for PostgresSourceConfig {
    fn connector_class(&self) -> &'static str {
        POSTGRES_CONNECTOR_CLASS
    }

    fn properties(&self) -> BTreeMap<String, String> {
        let properties = [
            ("connector.class", self.connector_class().to_string()),
            ("database.hostname", self.host.clone()),
            ("database.port", self.port.to_string()),
            ("database.user", self.user.clone()),
            ("database.password", self.password.clone()),
            ("database.dbname", self.db.clone()),
            ("topic.prefix", self.topic_prefix.clone()),
            (
                "table.include.list",
                format_table_list(DEFAULT_SCHEMA, &self.tables),
            ),
            ("plugin.name", "pgoutput".to_string()),
            ("snapshot.mode", self.snapshot_mode.clone()),
            ("decimal.handling.mode", "string".to_string()),
            ("time.precision.mode", "connect".to_string()),
        ];

        properties
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }
}
