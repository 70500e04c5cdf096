use actix_web::error::InternalError;
use actix_web::{web, HttpResponse};
use cdcr::error::CDCRError;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new<E>(error: E) -> Self
    where
        E: ToString,
    {
        ErrorResponse {
            error: error.to_string(),
        }
    }
}

pub fn error_response(err: &CDCRError) -> HttpResponse {
    let body = ErrorResponse::new(err);
    match err {
        CDCRError::ValidationError(_) | CDCRError::UnsupportedDatabaseError(_) => {
            HttpResponse::BadRequest().json(body)
        }
        CDCRError::ConflictError(_) => HttpResponse::Conflict().json(body),
        CDCRError::NotFoundError(_) => HttpResponse::NotFound().json(body),
        CDCRError::UpstreamError(_)
        | CDCRError::HttpClientError(_)
        | CDCRError::InvalidUrlError(_)
        | CDCRError::SerdeJsonError(_) => HttpResponse::InternalServerError().json(body),
    }
}

/// Malformed or incomplete JSON bodies become `400 {"error": ...}`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ErrorResponse::new(&err));
        InternalError::from_response(err, response).into()
    })
}
