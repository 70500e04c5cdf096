use crate::error::missing_value::MissingValueError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_SNAPSHOT_MODE: &str = "initial";
pub const DEFAULT_SERVER_ID: u32 = 184054;

/// A caller's description of a source database to capture.
#[derive(Deserialize, Serialize, Clone, PartialEq)]
pub struct RegistrationRequest {
    pub connector_name: String,
    pub database_type: String,
    pub database_host: String,
    pub database_port: u16,
    pub database_name: String,
    pub username: String,
    pub password: String,
    pub topic_prefix: String,
    pub tables: Vec<String>,

    /// initial, never, when_needed, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_mode: Option<String>,

    /// MySQL replication client id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_id: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transforms: Option<BTreeMap<String, String>>,
}

impl RegistrationRequest {
    pub fn validate(&self) -> Result<(), MissingValueError> {
        let required = [
            ("connector_name", &self.connector_name),
            ("database_type", &self.database_type),
            ("database_host", &self.database_host),
            ("database_name", &self.database_name),
            ("username", &self.username),
            ("password", &self.password),
            ("topic_prefix", &self.topic_prefix),
        ];
        for (field_name, value) in required {
            if value.trim().is_empty() {
                return Err(MissingValueError::new(field_name));
            }
        }

        if self.database_port == 0 {
            return Err(MissingValueError::new("database_port"));
        }

        if self.tables.is_empty() || self.tables.iter().any(|t| t.trim().is_empty()) {
            return Err(MissingValueError::new("tables"));
        }

        Ok(())
    }

    pub fn snapshot_mode(&self) -> &str {
        match self.snapshot_mode.as_deref() {
            Some(mode) if !mode.is_empty() => mode,
            _ => DEFAULT_SNAPSHOT_MODE,
        }
    }

    pub fn server_id(&self) -> u32 {
        match self.server_id {
            Some(id) if id != 0 => id,
            _ => DEFAULT_SERVER_ID,
        }
    }
}

// Credentials stay out of the logs.
impl std::fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("connector_name", &self.connector_name)
            .field("database_type", &self.database_type)
            .field("database_host", &self.database_host)
            .field("database_port", &self.database_port)
            .field("database_name", &self.database_name)
            .field("username", &self.username)
            .field("password", &"***")
            .field("topic_prefix", &self.topic_prefix)
            .field("tables", &self.tables)
            .field("snapshot_mode", &self.snapshot_mode)
            .field("server_id", &self.server_id)
            .field("transforms", &self.transforms)
            .finish()
    }
}
