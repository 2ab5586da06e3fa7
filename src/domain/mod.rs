//! Domain layer containing business rules and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (error codes, timestamps, state machine trait)
//! - `tax_id` - CPF/CNPJ cleaning, checksum validation and formatting
//! - `clinic` - Clinic identifiers and clinic memberships
//! - `session` - Roles, the resolved session and the login state machine
//! - `registration` - Requests for registering staff, tutors and clinics

pub mod clinic;
pub mod foundation;
pub mod registration;
pub mod session;
pub mod tax_id;
