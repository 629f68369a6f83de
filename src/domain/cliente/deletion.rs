use chrono::Utc;
use serde::Serialize;

use crate::gateways::{ClienteGateway, NotificationQueue, SolicitacaoRemocaoDadosGateway};

use crate::domain::remocao::SolicitacaoRemocaoDados;

use super::dto::RemocaoDadosDTO;
use super::errors::ClienteError;

// ============================================================================
// Remoção de Dados Workflow
// ============================================================================
//
// The right-to-erasure flow as an explicit state machine:
//
//   Iniciada → ClienteRemovido → RemocaoRegistrada → Notificado → Concluida
//
// The steps run strictly sequentially and are NOT transactional: once the
// cliente row is flagged removed, a later failure leaves that removal
// committed. The failure therefore carries the last committed stage, so an
// operator can resume the flow from there; no automatic compensation is
// attempted.
//
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EtapaRemocao {
    Iniciada,
    ClienteRemovido,
    RemocaoRegistrada,
    Notificado,
    Concluida,
}

impl EtapaRemocao {
    pub fn as_str(&self) -> &'static str {
        match self {
            EtapaRemocao::Iniciada => "iniciada",
            EtapaRemocao::ClienteRemovido => "cliente_removido",
            EtapaRemocao::RemocaoRegistrada => "remocao_registrada",
            EtapaRemocao::Notificado => "notificado",
            EtapaRemocao::Concluida => "concluida",
        }
    }
}

impl std::fmt::Display for EtapaRemocao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A workflow failure: the stage the flow had committed up to, plus the
/// error that stopped it.
#[derive(Debug)]
pub struct RemocaoFalha {
    pub etapa: EtapaRemocao,
    pub causa: ClienteError,
}

/// Message published to the anonimização topic once the cliente is removed.
#[derive(Debug, Serialize)]
struct NotificacaoRemocao {
    #[serde(rename = "clienteId")]
    cliente_id: String,
}

pub struct RemocaoWorkflow<'a> {
    clientes: &'a dyn ClienteGateway,
    solicitacoes: &'a dyn SolicitacaoRemocaoDadosGateway,
    fila: &'a dyn NotificationQueue,
}

impl<'a> RemocaoWorkflow<'a> {
    pub fn new(
        clientes: &'a dyn ClienteGateway,
        solicitacoes: &'a dyn SolicitacaoRemocaoDadosGateway,
        fila: &'a dyn NotificationQueue,
    ) -> Self {
        Self { clientes, solicitacoes, fila }
    }

    pub async fn run(&self, dados: &RemocaoDadosDTO) -> Result<(), RemocaoFalha> {
        let mut etapa = EtapaRemocao::Iniciada;
        let iniciado_em = Utc::now();

        let falha = |etapa, causa| RemocaoFalha { etapa, causa };

        // 1. Resolve the cliente. Nothing committed yet, so a miss leaves
        //    the system untouched.
        let cliente = match self.clientes.get_by_cpf(&dados.cpf).await {
            Ok(Some(cliente)) => cliente,
            Ok(None) => return Err(falha(etapa, ClienteError::NotFound)),
            Err(e) => return Err(falha(etapa, e.into())),
        };
        let cliente_id = match cliente.id.clone() {
            Some(id) => id,
            None => {
                let causa = anyhow::anyhow!("registro armazenado sem id: cpf {}", dados.cpf);
                return Err(falha(etapa, ClienteError::Storage(causa.into())));
            }
        };

        // 2. Remove the cliente record (the gateway keeps a logical-deletion
        //    marker rather than dropping the row).
        if let Err(e) = self.clientes.delete(&cliente_id).await {
            return Err(falha(etapa, e.into()));
        }
        etapa = EtapaRemocao::ClienteRemovido;
        tracing::debug!(cliente_id = %cliente_id, etapa = %etapa, "registro do cliente removido");

        // 3. Persist the audit record with the contact details the caller
        //    submitted, not the stored ones.
        let solicitacao = match SolicitacaoRemocaoDados::new(
            None,
            &dados.nome,
            &dados.endereco,
            &dados.numero_telefone,
        ) {
            Ok(solicitacao) => solicitacao,
            Err(e) => return Err(falha(etapa, e)),
        };
        if let Err(e) = self.solicitacoes.create(&solicitacao).await {
            return Err(falha(etapa, e.into()));
        }
        etapa = EtapaRemocao::RemocaoRegistrada;

        // 4. Notify downstream holders of related data.
        let payload = NotificacaoRemocao { cliente_id: cliente_id.clone() };
        let payload = match serde_json::to_string(&payload) {
            Ok(payload) => payload,
            Err(e) => return Err(falha(etapa, ClienteError::Queue(e.into()))),
        };
        if let Err(e) = self.fila.enqueue_message(&cliente_id, &payload).await {
            return Err(falha(etapa, ClienteError::Queue(e)));
        }
        etapa = EtapaRemocao::Notificado;
        tracing::debug!(cliente_id = %cliente_id, etapa = %etapa, "notificação publicada");

        etapa = EtapaRemocao::Concluida;
        tracing::info!(
            cliente_id = %cliente_id,
            etapa = %etapa,
            duracao_ms = (Utc::now() - iniciado_em).num_milliseconds(),
            "fluxo de remoção de dados concluído"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_payload_shape() {
        let payload = serde_json::to_string(&NotificacaoRemocao {
            cliente_id: "001".to_string(),
        })
        .unwrap();
        assert_eq!(payload, r#"{"clienteId":"001"}"#);
    }

    #[test]
    fn test_etapa_labels() {
        assert_eq!(EtapaRemocao::Iniciada.as_str(), "iniciada");
        assert_eq!(EtapaRemocao::ClienteRemovido.as_str(), "cliente_removido");
        assert_eq!(EtapaRemocao::RemocaoRegistrada.as_str(), "remocao_registrada");
        assert_eq!(EtapaRemocao::Notificado.as_str(), "notificado");
        assert_eq!(EtapaRemocao::Concluida.as_str(), "concluida");
    }
}
