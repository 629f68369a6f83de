use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod api;
mod config;
mod domain;
mod gateways;
mod messaging;
mod metrics;
mod postgres;

use config::Config;
use domain::cliente::ClienteUseCase;
use messaging::KafkaQueue;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Structured logging with environment-based filtering.
    // Default to INFO level, can be overridden with RUST_LOG env var.
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,cliente_service=debug")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!("🚀 Starting cliente service");

    let pool = postgres::connect(&config.postgres).await?;
    postgres::ensure_schema(&pool).await?;
    tracing::info!(database = %config.postgres.database, "Connected to Postgres");

    let fila = Arc::new(KafkaQueue::new(
        &config.kafka.brokers,
        &config.kafka.topico_anonimizacao,
    )?);
    tracing::info!(brokers = %config.kafka.brokers, topic = %config.kafka.topico_anonimizacao, "Kafka producer ready");

    let app_metrics = Arc::new(metrics::Metrics::new()?);

    let use_case = Arc::new(ClienteUseCase::new(
        Arc::new(postgres::PostgresClienteGateway::new(pool.clone())),
        Arc::new(postgres::PostgresSolicitacaoRemocaoDadosGateway::new(pool)),
        fila,
        app_metrics.clone(),
    ));

    let state = web::Data::new(api::AppState { use_case, metrics: app_metrics });

    let port = config.http_port;
    tracing::info!(port, "HTTP server listening");

    HttpServer::new(move || App::new().app_data(state.clone()).configure(api::configure))
        .bind(("0.0.0.0", port))?
        .run()
        .await?;

    Ok(())
}
