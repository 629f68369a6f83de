use serde::{Deserialize, Serialize};

use super::entity::Cliente;
use super::errors::ClienteError;
use super::value_objects::{Cpf, Email};

/// Wire representation of a cliente, as exchanged with the HTTP layer.
/// All fields are plain strings; the entity constructors re-validate on the
/// way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClienteDTO {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub nome: String,
    pub email: String,
    pub cpf: String,
}

impl ClienteDTO {
    pub fn into_entity(self) -> Result<Cliente, ClienteError> {
        let email = Email::new(self.email)?;
        let cpf = Cpf::new(self.cpf)?;
        Cliente::new(self.id, self.nome, email, cpf)
    }
}

impl From<&Cliente> for ClienteDTO {
    fn from(cliente: &Cliente) -> Self {
        Self {
            id: cliente.id.clone(),
            nome: cliente.nome.clone(),
            email: cliente.email.as_str().to_string(),
            cpf: cliente.cpf.as_str().to_string(),
        }
    }
}

/// Input of the right-to-erasure flow. The contact details are supplied by
/// the caller and may differ from what is stored for the cliente.
#[derive(Debug, Clone, Deserialize)]
pub struct RemocaoDadosDTO {
    pub cpf: String,
    pub nome: String,
    pub endereco: String,
    pub numero_telefone: String,
}
