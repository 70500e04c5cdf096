use crate::connector::builder::SourceProperties;
use crate::connector::request::RegistrationRequest;
use crate::connector::tables::format_table_list;
use std::collections::BTreeMap;

pub const MYSQL_CONNECTOR_CLASS: &str = "io.debezium.connector.mysql.MySqlConnector";

#[derive(Debug, Clone, PartialEq)]
pub struct MySQLSourceConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub db: String,
    pub server_id: u32,
    pub topic_prefix: String,
    pub tables: Vec<String>,
    pub snapshot_mode: String,
    pub schema_history_bootstrap_servers: String,
}

impl MySQLSourceConfig {
    pub fn new(request: &RegistrationRequest, schema_history_bootstrap_servers: &str) -> Self {
        MySQLSourceConfig {
            host: request.database_host.clone(),
            port: request.database_port,
            user: request.username.clone(),
            password: request.password.clone(),
            db: request.database_name.clone(),
            server_id: request.server_id(),
            topic_prefix: request.topic_prefix.clone(),
            tables: request.tables.clone(),
            snapshot_mode: request.snapshot_mode().to_string(),
            schema_history_bootstrap_servers: schema_history_bootstrap_servers.to_string(),
        }
    }
}

impl SourceProperties for MySQLSourceConfig {
    fn connector_class(&self) -> &'static str {
        MYSQL_CONNECTOR_CLASS
    }

    fn properties(&self) -> BTreeMap<String, String> {
        let properties = [
            ("connector.class", self.connector_class().to_string()),
            ("database.hostname", self.host.clone()),
            ("database.port", self.port.to_string()),
            ("database.user", self.user.clone()),
            ("database.password", self.password.clone()),
            ("database.server.id", self.server_id.to_string()),
            ("topic.prefix", self.topic_prefix.clone()),
            ("database.include.list", self.db.clone()),
            ("table.include.list", format_table_list(&self.db, &self.tables)),
            (
                "schema.history.internal.kafka.bootstrap.servers",
                self.schema_history_bootstrap_servers.clone(),
            ),
            (
                "schema.history.internal.kafka.topic",
                format!("schemahistory.{}", self.db),
            ),
            ("snapshot.mode", self.snapshot_mode.clone()),
            ("decimal.handling.mode", "string".to_string()),
            ("time.precision.mode", "connect".to_string()),
            ("include.schema.changes", "true".to_string()),
        ];

        properties
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::request::tests::mysql_request;

    #[test]
    fn test_new_mysql_source_config() {
        let config = MySQLSourceConfig::new(&mysql_request(), "kafka:9092");
        assert_eq!(config.host, "mysql.local");
        assert_eq!(config.port, 3306);
        assert_eq!(config.user, "debezium");
        assert_eq!(config.password, "secret");
        assert_eq!(config.db, "shop");
        assert_eq!(config.server_id, 184054);
        assert_eq!(config.snapshot_mode, "initial");
    }

    #[test]
    fn test_properties() {
        let mut request = mysql_request();
        request.server_id = Some(5400);
        let properties = MySQLSourceConfig::new(&request, "broker:29092").properties();

        assert_eq!(properties.len(), 15);
        assert_eq!(properties["connector.class"], MYSQL_CONNECTOR_CLASS);
        assert_eq!(properties["database.port"], "3306");
        assert_eq!(properties["database.server.id"], "5400");
        assert_eq!(properties["database.include.list"], "shop");
        assert_eq!(
            properties["table.include.list"],
            "shop.orders,shop.customers"
        );
        assert_eq!(
            properties["schema.history.internal.kafka.bootstrap.servers"],
            "broker:29092"
        );
        assert_eq!(
            properties["schema.history.internal.kafka.topic"],
            "schemahistory.shop"
        );
        assert_eq!(properties["include.schema.changes"], "true");
    }
}
