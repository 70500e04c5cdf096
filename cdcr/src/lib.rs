pub mod connector;
pub mod error;
pub mod kafka_connect;
pub mod registration;
