use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reported when the connector was accepted but its state could not be read.
pub const STATUS_CREATED: &str = "created";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RegistrationResult {
    pub connector_name: String,
    pub status: String,
    pub config: BTreeMap<String, String>,
    pub created_at: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ListConnectorsResponse {
    pub connectors: Vec<String>,
}
