mod args;
mod config;
mod routes;
mod state;
mod yaml;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use args::Args;
use cdcr::kafka_connect::KafkaConnectClient;
use cdcr::registration::RegistrationService;
use clap::Parser;
use config::AppConfig;
use log::info;
use routes::error::json_config;
use state::AppState;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = AppConfig::resolve(&args)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let client = KafkaConnectClient::new(&config.to_kafka_connect_config())?;
    info!("Using Kafka Connect at {}", client.base_url());

    let service = RegistrationService::new(Arc::new(client), &config.to_registration_config());
    let state = web::Data::new(AppState { service });

    for (method, path) in routes::ROUTES {
        info!("Registered route {} {}", method, path);
    }
    info!("Starting CDC registration service on port {}", config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(json_config())
            .wrap(Logger::default())
            .configure(routes::configure)
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await?;

    Ok(())
}
