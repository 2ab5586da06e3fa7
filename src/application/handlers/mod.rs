//! Application handlers.
//!
//! Command handlers that orchestrate the domain rules and the ports.

mod login;
mod logout;
mod password_reset;
mod register_clinic;
mod register_tutor;

pub use login::{LoginCommand, LoginHandler, LoginOutcome, PendingClinicChoice};
pub use logout::LogoutHandler;
pub use password_reset::precheck_password_reset;
pub use register_clinic::{RegisterClinicCommand, RegisterClinicHandler};
pub use register_tutor::{RegisterTutorCommand, RegisterTutorHandler};
