pub mod client;
pub mod config;
pub mod rest;
pub mod transport;

pub use client::ConnectorClient;
pub use config::KafkaConnectConfig;
pub use rest::KafkaConnectClient;
