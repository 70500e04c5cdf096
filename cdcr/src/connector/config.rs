use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The document submitted to `POST /connectors` on the connector manager.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ConnectorConfig {
    pub name: String,
    pub config: BTreeMap<String, String>,
}

impl ConnectorConfig {
    pub fn new<N>(name: N, config: BTreeMap<String, String>) -> Self
    where
        N: Into<String>,
    {
        ConnectorConfig {
            name: name.into(),
            config,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.config.get(key).map(|value| value.as_str())
    }
}
