pub mod builder;
pub mod config;
pub mod kind;
pub mod mysql_source;
pub mod postgres_source;
pub mod request;
pub mod response;
pub mod status;
pub mod tables;
