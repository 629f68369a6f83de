use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::remocao::SolicitacaoRemocaoDados;
use crate::gateways::{SolicitacaoRemocaoDadosGateway, StorageError};

pub struct PostgresSolicitacaoRemocaoDadosGateway {
    pool: PgPool,
}

impl PostgresSolicitacaoRemocaoDadosGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SolicitacaoRemocaoDadosGateway for PostgresSolicitacaoRemocaoDadosGateway {
    async fn create(&self, solicitacao: &SolicitacaoRemocaoDados) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT INTO cliente.solicitacao_remocao_dados (nome, endereco, numero_telefone)
             VALUES ($1, $2, $3)",
        )
        .bind(&solicitacao.nome)
        .bind(&solicitacao.endereco)
        .bind(&solicitacao.numero_telefone)
        .execute(&self.pool)
        .await
        .map_err(anyhow::Error::from)?;

        Ok(())
    }
}
