use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::PostgresConfig;

mod cliente_gateway;
mod remocao_gateway;

pub use cliente_gateway::PostgresClienteGateway;
pub use remocao_gateway::PostgresSolicitacaoRemocaoDadosGateway;

// ============================================================================
// Postgres Adapter
// ============================================================================

pub async fn connect(config: &PostgresConfig) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url())
        .await?;
    Ok(pool)
}

/// Idempotent schema bootstrap, run once at startup. No migration tooling:
/// the DDL below is the whole schema.
pub async fn ensure_schema(pool: &PgPool) -> anyhow::Result<()> {
    let statements = [
        "CREATE SCHEMA IF NOT EXISTS cliente",
        "CREATE TABLE IF NOT EXISTS cliente.clientes (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            nome VARCHAR(256) NOT NULL,
            email VARCHAR(256) NOT NULL,
            cpf VARCHAR(256) NOT NULL,
            deleted BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )",
        // Partial unique indices: uniqueness only among live rows, so a
        // removed cliente's email/cpf can be registered again.
        "CREATE UNIQUE INDEX IF NOT EXISTS clientes_email_unq
            ON cliente.clientes (email) WHERE NOT deleted",
        "CREATE UNIQUE INDEX IF NOT EXISTS clientes_cpf_unq
            ON cliente.clientes (cpf) WHERE NOT deleted",
        "CREATE TABLE IF NOT EXISTS cliente.solicitacao_remocao_dados (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            nome VARCHAR(256) NOT NULL,
            endereco VARCHAR(256) NOT NULL,
            numero_telefone VARCHAR(256) NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )",
    ];

    for statement in statements {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
