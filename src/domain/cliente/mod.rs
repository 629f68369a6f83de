pub mod deletion;
pub mod dto;
pub mod entity;
pub mod errors;
pub mod use_case;
pub mod value_objects;

// Re-export for convenience
pub use deletion::EtapaRemocao;
pub use dto::{ClienteDTO, RemocaoDadosDTO};
pub use entity::Cliente;
pub use errors::ClienteError;
pub use use_case::ClienteUseCase;
pub use value_objects::{Cpf, Email};
