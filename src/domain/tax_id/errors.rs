//! Identifier validation errors.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// Which Brazilian tax identifier is being handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxIdKind {
    /// Individual taxpayer registry (11 digits).
    Cpf,
    /// Legal entity registry (14 digits).
    Cnpj,
}

impl TaxIdKind {
    /// Number of digits a cleaned identifier of this kind must have.
    pub fn expected_len(&self) -> usize {
        match self {
            TaxIdKind::Cpf => 11,
            TaxIdKind::Cnpj => 14,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaxIdKind::Cpf => "CPF",
            TaxIdKind::Cnpj => "CNPJ",
        }
    }
}

impl fmt::Display for TaxIdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reasons a CPF or CNPJ fails validation.
///
/// Messages are meant for inline display next to the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TaxIdError {
    #[error("{0} is required")]
    MissingValue(TaxIdKind),

    #[error("{0} must have {len} digits", len = .0.expected_len())]
    WrongLength(TaxIdKind),

    #[error("Invalid {0} (repeated digits)")]
    RepeatedDigits(TaxIdKind),

    #[error("Invalid {0} (check digits do not match)")]
    ChecksumMismatch(TaxIdKind),
}

impl TaxIdError {
    pub fn kind(&self) -> TaxIdKind {
        match self {
            TaxIdError::MissingValue(kind)
            | TaxIdError::WrongLength(kind)
            | TaxIdError::RepeatedDigits(kind)
            | TaxIdError::ChecksumMismatch(kind) => *kind,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            TaxIdError::MissingValue(_) => ErrorCode::MissingValue,
            TaxIdError::WrongLength(_) => ErrorCode::WrongLength,
            TaxIdError::RepeatedDigits(_) => ErrorCode::RepeatedDigits,
            TaxIdError::ChecksumMismatch(_) => ErrorCode::ChecksumMismatch,
        }
    }
}
