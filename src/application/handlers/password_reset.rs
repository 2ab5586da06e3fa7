//! Guard for the "forgot password" dialog.

use crate::domain::tax_id::{Cpf, TaxIdError};

/// Checks the CPF typed on the login form before a reset may start.
///
/// The reset request is keyed by CPF, so an empty or invalid one would
/// only produce a confusing server error.
pub fn precheck_password_reset(identifier: &str) -> Result<Cpf, TaxIdError> {
    let cpf = Cpf::parse(identifier)?;
    tracing::debug!("Password reset allowed");
    Ok(cpf)
}
