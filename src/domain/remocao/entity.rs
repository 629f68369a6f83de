use crate::domain::cliente::ClienteError;

/// Audit record of a right-to-erasure request (solicitação de remoção de
/// dados). Append-only: created as a side effect of a cliente removal and
/// never updated afterwards. It deliberately stores the contact details the
/// requester submitted, not the cliente row, so there is no foreign key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolicitacaoRemocaoDados {
    pub id: Option<String>,
    pub nome: String,
    pub endereco: String,
    pub numero_telefone: String,
}

impl SolicitacaoRemocaoDados {
    pub fn new(
        id: Option<String>,
        nome: impl Into<String>,
        endereco: impl Into<String>,
        numero_telefone: impl Into<String>,
    ) -> Result<Self, ClienteError> {
        let nome = nome.into();
        let endereco = endereco.into();
        let numero_telefone = numero_telefone.into();

        // Checked in this order: nome, numero_telefone, endereco.
        if nome.trim().is_empty() {
            return Err(ClienteError::MissingField("nome"));
        }
        if numero_telefone.trim().is_empty() {
            return Err(ClienteError::MissingField("numero_telefone"));
        }
        if endereco.trim().is_empty() {
            return Err(ClienteError::MissingField("endereco"));
        }

        Ok(Self { id, nome, endereco, numero_telefone })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructs_with_all_fields_present() {
        let solicitacao =
            SolicitacaoRemocaoDados::new(None, "John Doe", "Rua 2, 0", "123456789").unwrap();
        assert!(solicitacao.id.is_none());
        assert_eq!(solicitacao.nome, "John Doe");
        assert_eq!(solicitacao.endereco, "Rua 2, 0");
        assert_eq!(solicitacao.numero_telefone, "123456789");
    }

    #[test]
    fn test_field_checks_fail_fast_in_declared_order() {
        match SolicitacaoRemocaoDados::new(None, "", "", "") {
            Err(ClienteError::MissingField("nome")) => {}
            other => panic!("expected MissingField(nome), got {:?}", other),
        }

        match SolicitacaoRemocaoDados::new(None, "John Doe", "", "") {
            Err(ClienteError::MissingField("numero_telefone")) => {}
            other => panic!("expected MissingField(numero_telefone), got {:?}", other),
        }

        match SolicitacaoRemocaoDados::new(None, "John Doe", "", "123456789") {
            Err(ClienteError::MissingField("endereco")) => {}
            other => panic!("expected MissingField(endereco), got {:?}", other),
        }
    }
}
