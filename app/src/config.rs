use crate::args::Args;
use crate::yaml::load_config;
use cdcr::connector::builder::DEFAULT_SCHEMA_HISTORY_BOOTSTRAP_SERVERS;
use cdcr::kafka_connect::config::DEFAULT_KAFKA_CONNECT_URL;
use cdcr::kafka_connect::KafkaConnectConfig;
use cdcr::registration::RegistrationConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub port: u16,
    pub kafka_connect_url: String,
    pub log_level: String,
    pub schema_history_bootstrap_servers: String,
    pub status_check_delay_ms: u64,
    pub http: HttpConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_secs: u64,
    pub retry_count: u32,
    pub retry_wait_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            port: 8080,
            kafka_connect_url: DEFAULT_KAFKA_CONNECT_URL.to_string(),
            log_level: "info".to_string(),
            schema_history_bootstrap_servers: DEFAULT_SCHEMA_HISTORY_BOOTSTRAP_SERVERS.to_string(),
            status_check_delay_ms: 2000,
            http: HttpConfig::default(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        HttpConfig {
            timeout_secs: 30,
            retry_count: 3,
            retry_wait_ms: 5000,
        }
    }
}

impl AppConfig {
    pub fn resolve(args: &Args) -> anyhow::Result<Self> {
        let mut config = match &args.config {
            Some(path) => load_config(path)?,
            None => AppConfig::default(),
        };
        config.apply_args(args);
        Ok(config)
    }

    fn apply_args(&mut self, args: &Args) {
        if let Some(port) = args.port {
            self.port = port;
        }
        if let Some(url) = &args.kafka_connect_url {
            self.kafka_connect_url = url.clone();
        }
        if let Some(level) = &args.log_level {
            self.log_level = level.clone();
        }
    }

    pub fn to_kafka_connect_config(&self) -> KafkaConnectConfig {
        KafkaConnectConfig::new(
            self.kafka_connect_url.clone(),
            Duration::from_secs(self.http.timeout_secs),
            self.http.retry_count,
            Duration::from_millis(self.http.retry_wait_ms),
        )
    }

    pub fn to_registration_config(&self) -> RegistrationConfig {
        RegistrationConfig::new(
            self.schema_history_bootstrap_servers.clone(),
            Duration::from_millis(self.status_check_delay_ms),
        )
    }
}
