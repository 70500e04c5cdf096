pub mod config;
pub mod service;

pub use config::RegistrationConfig;
pub use service::RegistrationService;
