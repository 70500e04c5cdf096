use crate::connector::builder::DEFAULT_SCHEMA_HISTORY_BOOTSTRAP_SERVERS;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationConfig {
    pub schema_history_bootstrap_servers: String,
    /// Time given to the manager to move a new connector out of UNASSIGNED
    /// before its status is read.
    pub status_check_delay: Duration,
}

impl RegistrationConfig {
    pub fn new(schema_history_bootstrap_servers: String, status_check_delay: Duration) -> Self {
        RegistrationConfig {
            schema_history_bootstrap_servers,
            status_check_delay,
        }
    }
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        RegistrationConfig::new(
            DEFAULT_SCHEMA_HISTORY_BOOTSTRAP_SERVERS.to_string(),
            Duration::from_secs(2),
        )
    }
}
