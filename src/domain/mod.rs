// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// One subdirectory per aggregate: value objects, entity, errors and the
// use-case orchestration live together, separate from the Postgres/Kafka
// adapters.
//
// ============================================================================

pub mod cliente;
pub mod remocao;
