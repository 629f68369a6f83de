use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::domain::cliente::{ClienteError, ClienteUseCase};
use crate::metrics::Metrics;

mod routes;

pub use routes::configure;

/// Shared handler state, built once in main and cloned per worker.
pub struct AppState {
    pub use_case: Arc<ClienteUseCase>,
    pub metrics: Arc<Metrics>,
}

/// HTTP-facing wrapper around the domain error. Validation faults map to
/// 400, lookups that miss to 404, duplicates to 409; the collapsed remoção
/// wrapper and any storage/queue fault stay an opaque 500.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] ClienteError);

impl actix_web::ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        use actix_web::http::StatusCode;

        let status = match &self.0 {
            ClienteError::InvalidCpf(_)
            | ClienteError::InvalidEmail(_)
            | ClienteError::MissingField(_) => StatusCode::BAD_REQUEST,
            ClienteError::NotFound => StatusCode::NOT_FOUND,
            ClienteError::AlreadyExists => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = if self.0.is_client_fault() {
            self.0.to_string()
        } else {
            // Internal detail stays in the logs, not the response body.
            "internal error".to_string()
        };

        HttpResponse::build(status).json(serde_json::json!({ "error": message }))
    }
}

pub fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "cliente-service"
    }))
}

pub fn metrics_text(metrics: &Metrics) -> HttpResponse {
    use prometheus::{Encoder, TextEncoder};

    let encoder = TextEncoder::new();
    let metric_families = metrics.registry().gather();

    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "failed to encode metrics");
        return HttpResponse::InternalServerError().finish();
    }

    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(buffer)
}

pub type Data = web::Data<AppState>;

#[cfg(test)]
mod tests {
    use actix_web::ResponseError;

    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = ApiError(ClienteError::MissingField("nome")).error_response();
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ApiError(ClienteError::NotFound).error_response();
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_duplicate_maps_to_conflict() {
        let response = ApiError(ClienteError::AlreadyExists).error_response();
        assert_eq!(response.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[test]
    fn test_remocao_wrapper_maps_to_internal_error() {
        use crate::domain::cliente::EtapaRemocao;

        // Even a wrapped NotFound surfaces as the collapsed internal kind.
        let err = ApiError(ClienteError::RemocaoFalhou {
            etapa: EtapaRemocao::Iniciada,
            causa: Box::new(ClienteError::NotFound),
        });
        let response = err.error_response();
        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
