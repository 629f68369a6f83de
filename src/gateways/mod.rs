use async_trait::async_trait;

use crate::domain::cliente::Cliente;
use crate::domain::remocao::SolicitacaoRemocaoDados;

// ============================================================================
// Gateway Ports
// ============================================================================
//
// The boundary the use-case layer owns: storage and queue contracts, with
// the concrete Postgres/Kafka adapters living in their own modules. The use
// case only ever holds `Arc<dyn …>` handles to these.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A storage-enforced unique constraint rejected the write. Used by
    /// `create` so a lost duplicate-check race still surfaces as a conflict.
    #[error("registro duplicado")]
    Duplicate,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Persistence contract for the cliente aggregate. `create` returns the
/// stored record with the id the storage assigned; lookups return `None`
/// for absent (or logically removed) records.
#[async_trait]
pub trait ClienteGateway: Send + Sync {
    async fn create(&self, cliente: &Cliente) -> Result<Cliente, StorageError>;
    async fn get_by_id(&self, id: &str) -> Result<Option<Cliente>, StorageError>;
    async fn get_by_email(&self, email: &str) -> Result<Option<Cliente>, StorageError>;
    async fn get_by_cpf(&self, cpf: &str) -> Result<Option<Cliente>, StorageError>;
    async fn check_duplicate(&self, email: &str, cpf: &str) -> Result<bool, StorageError>;
    async fn delete(&self, id: &str) -> Result<(), StorageError>;
}

/// Append-only persistence for erasure-request audit records.
#[async_trait]
pub trait SolicitacaoRemocaoDadosGateway: Send + Sync {
    async fn create(&self, solicitacao: &SolicitacaoRemocaoDados) -> Result<(), StorageError>;
}

/// Fire-and-forget publisher for downstream notification.
#[async_trait]
pub trait NotificationQueue: Send + Sync {
    async fn enqueue_message(&self, key: &str, payload: &str) -> anyhow::Result<()>;
}
