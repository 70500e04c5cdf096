use std::time::Duration;

pub const DEFAULT_KAFKA_CONNECT_URL: &str = "http://localhost:8083";

#[derive(Debug, Clone, PartialEq)]
pub struct KafkaConnectConfig {
    pub url: String,
    pub timeout: Duration,
    /// Additional attempts after the first one.
    pub retry_count: u32,
    pub retry_wait: Duration,
}

impl KafkaConnectConfig {
    pub fn new(url: String, timeout: Duration, retry_count: u32, retry_wait: Duration) -> Self {
        KafkaConnectConfig {
            url,
            timeout,
            retry_count,
            retry_wait,
        }
    }
}

impl Default for KafkaConnectConfig {
    fn default() -> Self {
        KafkaConnectConfig::new(
            DEFAULT_KAFKA_CONNECT_URL.to_string(),
            Duration::from_secs(30),
            3,
            Duration::from_secs(5),
        )
    }
}
