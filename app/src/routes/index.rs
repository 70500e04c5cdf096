use actix_web::{get, HttpResponse};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
struct HealthResponse {
    version: String,
    status: String,
}

#[get("/health")]
pub async fn health() -> HttpResponse {
    let resp = HealthResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "ok".to_string(),
    };
    HttpResponse::Ok().json(resp)
}
