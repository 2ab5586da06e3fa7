//! Foundation module - Shared domain primitives.
//!
//! Error vocabulary, timestamps and the state machine trait shared by the
//! identifier, clinic and session modules.

mod errors;
mod state_machine;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
