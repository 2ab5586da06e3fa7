//! Application layer - command handlers and the shared session.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;
mod session_handle;

pub use handlers::{
    precheck_password_reset, LoginCommand, LoginHandler, LoginOutcome, LogoutHandler,
    PendingClinicChoice, RegisterClinicCommand, RegisterClinicHandler, RegisterTutorCommand,
    RegisterTutorHandler,
};
pub use session_handle::SessionHandle;
