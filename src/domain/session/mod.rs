//! Session domain module.
//!
//! Everything needed to turn a login into a usable session:
//!
//! - `Role` - closed set of roles plus the classification rule
//! - `Session` / `ResolvedSession` - the externally observed session
//! - `LoginStatus` - state machine of a single login attempt
//! - `LoginError` - why an attempt failed

mod aggregate;
mod errors;
mod role;
mod status;
mod token;

pub use aggregate::{ResolvedSession, Session};
pub use errors::LoginError;
pub use role::{CoarseUserType, MembershipKind, Role, UserExtraData, ADMIN_JOB_TITLE};
pub use status::LoginStatus;
pub use token::AccessToken;
