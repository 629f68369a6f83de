use std::sync::Arc;
use std::time::Instant;

use crate::gateways::{
    ClienteGateway, NotificationQueue, SolicitacaoRemocaoDadosGateway, StorageError,
};
use crate::metrics::Metrics;

use super::deletion::RemocaoWorkflow;
use super::dto::{ClienteDTO, RemocaoDadosDTO};
use super::errors::ClienteError;
use super::value_objects::{Cpf, Email};

// ============================================================================
// Cliente Use Case
// ============================================================================
//
// Orchestrates the cliente lifecycle over the gateway ports. Holds no
// mutable state of its own; concurrent requests only share the injected
// collaborators.
//
// ============================================================================

pub struct ClienteUseCase {
    cliente_gateway: Arc<dyn ClienteGateway>,
    remocao_gateway: Arc<dyn SolicitacaoRemocaoDadosGateway>,
    fila_notificacao: Arc<dyn NotificationQueue>,
    metrics: Arc<Metrics>,
}

impl ClienteUseCase {
    pub fn new(
        cliente_gateway: Arc<dyn ClienteGateway>,
        remocao_gateway: Arc<dyn SolicitacaoRemocaoDadosGateway>,
        fila_notificacao: Arc<dyn NotificationQueue>,
        metrics: Arc<Metrics>,
    ) -> Self {
        Self { cliente_gateway, remocao_gateway, fila_notificacao, metrics }
    }

    /// Register a new cliente. The gateway-level duplicate check runs first
    /// so an existing email or cpf never reaches `create`; the storage's own
    /// unique constraints close the remaining check-then-act window, and a
    /// lost race surfaces as the same conflict.
    pub async fn create(&self, dto: ClienteDTO) -> Result<ClienteDTO, ClienteError> {
        let inicio = Instant::now();
        let novo = dto.into_entity()?;

        let duplicado = self
            .cliente_gateway
            .check_duplicate(novo.email.as_str(), novo.cpf.as_str())
            .await?;
        if duplicado {
            return Err(ClienteError::AlreadyExists);
        }

        let salvo = match self.cliente_gateway.create(&novo).await {
            Ok(salvo) => salvo,
            Err(StorageError::Duplicate) => return Err(ClienteError::AlreadyExists),
            Err(e) => return Err(e.into()),
        };

        self.metrics.record_criacao(inicio.elapsed().as_secs_f64());
        tracing::info!(cliente_id = ?salvo.id, "cliente registrado");
        Ok(ClienteDTO::from(&salvo))
    }

    pub async fn get_by_cpf(&self, cpf: &str) -> Result<ClienteDTO, ClienteError> {
        let cpf = Cpf::new(cpf)?;
        self.metrics.record_consulta("cpf");

        let cliente = self
            .cliente_gateway
            .get_by_cpf(cpf.as_str())
            .await?
            .ok_or(ClienteError::NotFound)?;
        Ok(ClienteDTO::from(&cliente))
    }

    pub async fn get_by_email(&self, email: &str) -> Result<ClienteDTO, ClienteError> {
        let email = Email::new(email)?;
        self.metrics.record_consulta("email");

        let cliente = self
            .cliente_gateway
            .get_by_email(email.as_str())
            .await?
            .ok_or(ClienteError::NotFound)?;
        Ok(ClienteDTO::from(&cliente))
    }

    /// Ids are opaque storage-assigned identifiers, so no value object is
    /// built for them.
    pub async fn get_by_id(&self, id: &str) -> Result<ClienteDTO, ClienteError> {
        self.metrics.record_consulta("id");

        let cliente = self
            .cliente_gateway
            .get_by_id(id)
            .await?
            .ok_or(ClienteError::NotFound)?;
        Ok(ClienteDTO::from(&cliente))
    }

    /// Right-to-erasure flow. Any failure, a missing cliente included,
    /// collapses into `RemocaoFalhou` carrying the committed stage and the
    /// cause.
    pub async fn delete(&self, dados: RemocaoDadosDTO) -> Result<(), ClienteError> {
        let inicio = Instant::now();
        let workflow = RemocaoWorkflow::new(
            self.cliente_gateway.as_ref(),
            self.remocao_gateway.as_ref(),
            self.fila_notificacao.as_ref(),
        );

        match workflow.run(&dados).await {
            Ok(()) => {
                self.metrics.record_remocao_concluida(inicio.elapsed().as_secs_f64());
                Ok(())
            }
            Err(falha) => {
                tracing::error!(
                    etapa = %falha.etapa,
                    erro = %falha.causa,
                    "fluxo de remoção de dados interrompido"
                );
                self.metrics.record_remocao_falha(falha.etapa.as_str());
                Err(ClienteError::RemocaoFalhou {
                    etapa: falha.etapa,
                    causa: Box::new(falha.causa),
                })
            }
        }
    }
}
