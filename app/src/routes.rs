pub mod connector;
pub mod error;
pub mod index;

use actix_web::web;

/// (method, path) of every route, logged at startup.
pub const ROUTES: [(&str, &str); 5] = [
    ("GET", "/health"),
    ("POST", "/connectors"),
    ("GET", "/connectors"),
    ("GET", "/connectors/{name}/status"),
    ("DELETE", "/connectors/{name}"),
];

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index::health)
        .service(connector::post_connectors)
        .service(connector::get_connectors)
        .service(connector::get_connector_status)
        .service(connector::delete_connector);
}
