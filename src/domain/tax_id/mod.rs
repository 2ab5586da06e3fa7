//! Tax identifier module - CPF and CNPJ handling.
//!
//! Pure functions that clean, validate and format Brazilian tax IDs.
//! Validation runs before any network call so forms can block submission
//! and show the reason inline; the backing services may still re-validate.
//!
//! Two layers are offered:
//!
//! - `validate_cpf` / `validate_cnpj` return a [`Validation`] value that
//!   never fails, for callers rendering field errors.
//! - [`Cpf::parse`] / [`Cnpj::parse`] produce normalised newtypes, which are
//!   what every port accepts.

mod cnpj;
mod cpf;
mod errors;

pub use cnpj::{format_cnpj, validate_cnpj, Cnpj};
pub use cpf::{format_cpf, validate_cpf, Cpf};
pub use errors::{TaxIdError, TaxIdKind};

/// Outcome of validating a raw identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validation {
    pub is_valid: bool,
    pub error: Option<TaxIdError>,
}

impl Validation {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn invalid(error: TaxIdError) -> Self {
        Self {
            is_valid: false,
            error: Some(error),
        }
    }

    /// Converts into a `Result` for `?`-style callers.
    pub fn into_result(self) -> Result<(), TaxIdError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl From<Result<(), TaxIdError>> for Validation {
    fn from(result: Result<(), TaxIdError>) -> Self {
        match result {
            Ok(()) => Validation::valid(),
            Err(error) => Validation::invalid(error),
        }
    }
}

/// Strips every character that is not an ASCII digit.
pub fn clean(id: &str) -> String {
    id.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Formats a CPF or CNPJ depending on its cleaned length.
///
/// Anything that is neither 11 nor 14 digits comes back unchanged.
pub fn format(id: &str) -> String {
    match clean(id).len() {
        11 => format_cpf(id),
        14 => format_cnpj(id),
        _ => id.to_string(),
    }
}

/// Runs the checks shared by both identifiers and returns the digits.
///
/// Order matters: missing, then length, then repeated digits. Only the
/// empty string is missing; whitespace is cleaned away like any separator.
fn checked_digits(raw: &str, kind: TaxIdKind) -> Result<Vec<u32>, TaxIdError> {
    if raw.is_empty() {
        return Err(TaxIdError::MissingValue(kind));
    }

    let digits: Vec<u32> = raw.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != kind.expected_len() {
        return Err(TaxIdError::WrongLength(kind));
    }

    if digits.iter().all(|d| *d == digits[0]) {
        return Err(TaxIdError::RepeatedDigits(kind));
    }

    Ok(digits)
}
