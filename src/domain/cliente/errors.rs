use crate::gateways::StorageError;

use super::deletion::EtapaRemocao;

// ============================================================================
// Cliente Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ClienteError {
    #[error("cpf fora do formato NNN.NNN.NNN-NN: {0}")]
    InvalidCpf(String),

    #[error("email com formato inválido: {0}")]
    InvalidEmail(String),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Cliente já existe")]
    AlreadyExists,

    #[error("Cliente não encontrado")]
    NotFound,

    #[error("falha de armazenamento: {0}")]
    Storage(#[from] StorageError),

    #[error("falha ao publicar notificação: {0}")]
    Queue(#[source] anyhow::Error),

    /// Delete-workflow wrapper: every failure in the removal flow collapses
    /// into this one kind, keeping the last committed stage and the original
    /// error as the source chain.
    #[error("fluxo de remoção interrompido após a etapa {etapa}")]
    RemocaoFalhou {
        etapa: EtapaRemocao,
        #[source]
        causa: Box<ClienteError>,
    },
}

impl ClienteError {
    /// True for errors the caller can fix by changing the input.
    pub fn is_client_fault(&self) -> bool {
        matches!(
            self,
            ClienteError::InvalidCpf(_)
                | ClienteError::InvalidEmail(_)
                | ClienteError::MissingField(_)
                | ClienteError::AlreadyExists
                | ClienteError::NotFound
        )
    }
}
