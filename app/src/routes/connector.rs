use crate::routes::error::error_response;
use crate::state::AppState;
use actix_web::{delete, get, post, web, HttpResponse};
use cdcr::connector::request::RegistrationRequest;
use log::{error, info};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
struct MessageResponse {
    message: String,
}

#[post("/connectors")]
pub async fn post_connectors(
    state: web::Data<AppState>,
    body: web::Json<RegistrationRequest>,
) -> HttpResponse {
    let request = body.into_inner();
    match state.service.register(&request).await {
        Ok(result) => HttpResponse::Created().json(result),
        Err(err) => {
            error!(
                "Failed to register connector {}: {}",
                request.connector_name, err
            );
            error_response(&err)
        }
    }
}

#[get("/connectors")]
pub async fn get_connectors(state: web::Data<AppState>) -> HttpResponse {
    match state.service.list().await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => {
            error!("Failed to list connectors: {}", err);
            error_response(&err)
        }
    }
}

#[get("/connectors/{name}/status")]
pub async fn get_connector_status(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> HttpResponse {
    let name = path.into_inner();
    match state.service.status(&name).await {
        Ok(status) => HttpResponse::Ok().json(status),
        Err(err) => {
            error!("Failed to get status of connector {}: {}", name, err);
            error_response(&err)
        }
    }
}

#[delete("/connectors/{name}")]
pub async fn delete_connector(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> HttpResponse {
    let name = path.into_inner();
    info!("Deleting connector {}", name);
    match state.service.delete(&name).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse {
            message: format!("Connector {} deleted successfully", name),
        }),
        Err(err) => {
            error!("Failed to delete connector {}: {}", name, err);
            error_response(&err)
        }
    }
}
