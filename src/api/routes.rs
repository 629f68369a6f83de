use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::domain::cliente::{ClienteDTO, RemocaoDadosDTO};

use super::{ApiError, Data};

// ============================================================================
// HTTP Routes
// ============================================================================
//
// POST   /clientes                     register
// GET    /clientes/{id}                lookup by id
// GET    /clientes/by-email/{email}    lookup by email
// GET    /clientes/by-cpf/{cpf}        lookup by cpf
// DELETE /clientes/{cpf}               right-to-erasure flow
// GET    /health, GET /metrics
//
// ============================================================================

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/clientes")
            .route("", web::post().to(post_cliente))
            .route("/by-email/{email}", web::get().to(get_by_email))
            .route("/by-cpf/{cpf}", web::get().to(get_by_cpf))
            .route("/{id}", web::get().to(get_by_id))
            .route("/{cpf}", web::delete().to(delete_cliente)),
    )
    .route("/health", web::get().to(health))
    .route("/metrics", web::get().to(metrics));
}

async fn post_cliente(
    state: Data,
    body: web::Json<ClienteDTO>,
) -> Result<HttpResponse, ApiError> {
    let criado = state.use_case.create(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(criado))
}

async fn get_by_id(state: Data, id: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let cliente = state.use_case.get_by_id(&id).await?;
    Ok(HttpResponse::Ok().json(cliente))
}

async fn get_by_email(state: Data, email: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let cliente = state.use_case.get_by_email(&email).await?;
    Ok(HttpResponse::Ok().json(cliente))
}

async fn get_by_cpf(state: Data, cpf: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let cliente = state.use_case.get_by_cpf(&cpf).await?;
    Ok(HttpResponse::Ok().json(cliente))
}

/// Body of the DELETE route: the contact details the requester submits for
/// the erasure audit record; the cpf comes from the path.
#[derive(Debug, Deserialize)]
struct RemocaoCorpo {
    nome: String,
    endereco: String,
    numero_telefone: String,
}

async fn delete_cliente(
    state: Data,
    cpf: web::Path<String>,
    body: web::Json<RemocaoCorpo>,
) -> Result<HttpResponse, ApiError> {
    let corpo = body.into_inner();
    state
        .use_case
        .delete(RemocaoDadosDTO {
            cpf: cpf.into_inner(),
            nome: corpo.nome,
            endereco: corpo.endereco,
            numero_telefone: corpo.numero_telefone,
        })
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "User removed with success" })))
}

async fn health() -> HttpResponse {
    super::health()
}

async fn metrics(state: Data) -> HttpResponse {
    super::metrics_text(&state.metrics)
}
