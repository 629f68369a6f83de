use super::errors::ClienteError;
use super::value_objects::{Cpf, Email};

/// Cliente aggregate. The id is absent until the storage gateway assigns one
/// on create; email and cpf are always valid by construction since only the
/// value-object constructors can produce them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cliente {
    pub id: Option<String>,
    pub nome: String,
    pub email: Email,
    pub cpf: Cpf,
}

impl Cliente {
    pub fn new(
        id: Option<String>,
        nome: impl Into<String>,
        email: Email,
        cpf: Cpf,
    ) -> Result<Self, ClienteError> {
        let nome = nome.into();
        if nome.trim().is_empty() {
            return Err(ClienteError::MissingField("nome"));
        }

        Ok(Self { id, nome, email, cpf })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> Email {
        Email::new("jdoe1@email.com").unwrap()
    }

    fn cpf() -> Cpf {
        Cpf::new("111.111.111-11").unwrap()
    }

    #[test]
    fn test_new_cliente_has_no_id_before_persistence() {
        let cliente = Cliente::new(None, "John Doe", email(), cpf()).unwrap();
        assert!(cliente.id.is_none());
        assert_eq!(cliente.nome, "John Doe");
        assert_eq!(cliente.email.as_str(), "jdoe1@email.com");
        assert_eq!(cliente.cpf.as_str(), "111.111.111-11");
    }

    #[test]
    fn test_rejects_empty_nome_even_with_valid_value_objects() {
        for nome in ["", "   "] {
            match Cliente::new(None, nome, email(), cpf()) {
                Err(ClienteError::MissingField("nome")) => {}
                other => panic!("expected MissingField(nome), got {:?}", other),
            }
        }
    }
}
