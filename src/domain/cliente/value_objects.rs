use once_cell::sync::Lazy;
use regex::Regex;

use super::errors::ClienteError;

// ============================================================================
// Cliente Value Objects
// ============================================================================
//
// Parse-don't-validate newtypes: a `Cpf` or `Email` can only be obtained
// through its fallible constructor, so any instance held elsewhere in the
// system is known to be well-formed.
//
// ============================================================================

static CPF_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{3}\.\d{3}\.\d{3}-\d{2}$").expect("cpf regex"));

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

/// CPF in the `NNN.NNN.NNN-NN` shape. Format-only check: the check-digit
/// algorithm is intentionally not applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cpf(String);

impl Cpf {
    pub fn new(raw: impl Into<String>) -> Result<Self, ClienteError> {
        let raw = raw.into();
        if !CPF_REGEX.is_match(&raw) {
            return Err(ClienteError::InvalidCpf(raw));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cliente email address (`local@domain.tld` shape, single `@`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    pub fn new(raw: impl Into<String>) -> Result<Self, ClienteError> {
        let raw = raw.into();
        if !EMAIL_REGEX.is_match(&raw) {
            return Err(ClienteError::InvalidEmail(raw));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
