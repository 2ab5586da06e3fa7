//! Mock adapters for tests.
//!
//! These implement the remote ports in memory so the application handlers
//! can be exercised without the auth or backend APIs.

mod auth;
mod clinic;
mod membership;

pub use auth::{test_token, MockAuthGateway, RecordedStaff, RecordedTutor};
pub use clinic::MockClinicGateway;
pub use membership::MockMembershipDirectory;
