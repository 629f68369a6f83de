use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::cliente::{Cliente, Cpf, Email};
use crate::gateways::{ClienteGateway, StorageError};

const SELECT_COLUMNS: &str = "id::text AS id, nome, email, cpf";

pub struct PostgresClienteGateway {
    pool: PgPool,
}

impl PostgresClienteGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ClienteRow {
    id: String,
    nome: String,
    email: String,
    cpf: String,
}

impl ClienteRow {
    fn into_entity(self) -> Result<Cliente, StorageError> {
        // A stored row failing re-validation means the table was written
        // past the domain layer; surface it as a storage fault.
        let email = Email::new(self.email)
            .map_err(|e| StorageError::Other(anyhow::anyhow!("linha inválida: {e}")))?;
        let cpf = Cpf::new(self.cpf)
            .map_err(|e| StorageError::Other(anyhow::anyhow!("linha inválida: {e}")))?;
        Cliente::new(Some(self.id), self.nome, email, cpf)
            .map_err(|e| StorageError::Other(anyhow::anyhow!("linha inválida: {e}")))
    }
}

fn parse_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id).ok()
}

#[async_trait]
impl ClienteGateway for PostgresClienteGateway {
    /// Conditional insert: the partial unique indices on email and cpf make
    /// this a single atomic check-and-insert, so two concurrent creates for
    /// the same cliente cannot both succeed.
    async fn create(&self, cliente: &Cliente) -> Result<Cliente, StorageError> {
        let query = format!(
            "INSERT INTO cliente.clientes (nome, email, cpf)
             VALUES ($1, $2, $3)
             ON CONFLICT DO NOTHING
             RETURNING {SELECT_COLUMNS}"
        );
        let row: Option<ClienteRow> = sqlx::query_as(&query)
            .bind(&cliente.nome)
            .bind(cliente.email.as_str())
            .bind(cliente.cpf.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(anyhow::Error::from)?;

        row.ok_or(StorageError::Duplicate)?.into_entity()
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Cliente>, StorageError> {
        // Ids are uuids in storage; anything else cannot match a row.
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        let query = format!(
            "SELECT {SELECT_COLUMNS} FROM cliente.clientes WHERE id = $1 AND NOT deleted"
        );
        let row: Option<ClienteRow> = sqlx::query_as(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(anyhow::Error::from)?;

        row.map(ClienteRow::into_entity).transpose()
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<Cliente>, StorageError> {
        let query = format!(
            "SELECT {SELECT_COLUMNS} FROM cliente.clientes WHERE email = $1 AND NOT deleted"
        );
        let row: Option<ClienteRow> = sqlx::query_as(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(anyhow::Error::from)?;

        row.map(ClienteRow::into_entity).transpose()
    }

    async fn get_by_cpf(&self, cpf: &str) -> Result<Option<Cliente>, StorageError> {
        let query = format!(
            "SELECT {SELECT_COLUMNS} FROM cliente.clientes WHERE cpf = $1 AND NOT deleted"
        );
        let row: Option<ClienteRow> = sqlx::query_as(&query)
            .bind(cpf)
            .fetch_optional(&self.pool)
            .await
            .map_err(anyhow::Error::from)?;

        row.map(ClienteRow::into_entity).transpose()
    }

    async fn check_duplicate(&self, email: &str, cpf: &str) -> Result<bool, StorageError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(
                SELECT 1 FROM cliente.clientes
                WHERE (email = $1 OR cpf = $2) AND NOT deleted
            )",
        )
        .bind(email)
        .bind(cpf)
        .fetch_one(&self.pool)
        .await
        .map_err(anyhow::Error::from)?;

        Ok(exists)
    }

    /// Logical deletion: the row keeps its audit value, lookups and the
    /// duplicate check stop seeing it.
    async fn delete(&self, id: &str) -> Result<(), StorageError> {
        let id = parse_id(id)
            .ok_or_else(|| StorageError::Other(anyhow::anyhow!("id inválido: {id}")))?;

        sqlx::query("UPDATE cliente.clientes SET deleted = TRUE WHERE id = $1 AND NOT deleted")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(anyhow::Error::from)?;

        Ok(())
    }
}
