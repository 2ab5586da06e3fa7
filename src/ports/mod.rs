//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Remote Collaborators
//!
//! - `AuthGateway` - Login and account registration (auth API)
//! - `StaffMembershipReader` / `TutorMembershipReader` - Clinic memberships (backend API)
//! - `StaffMembershipWriter` - Linking staff to a clinic (backend API)
//! - `ClinicGateway` - Clinic records (backend API)
//!
//! ## Local State
//!
//! - `SessionStore` - Bearer token and active clinic

mod auth_gateway;
mod clinic_gateway;
mod gateway_error;
mod membership;
mod session_store;

pub use auth_gateway::{AuthGateway, LoginGrant};
pub use clinic_gateway::ClinicGateway;
pub use gateway_error::GatewayError;
pub use membership::{StaffMembershipReader, StaffMembershipWriter, TutorMembershipReader};
pub use session_store::{SessionStore, SessionStoreError};
