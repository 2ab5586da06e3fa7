//! AuVet - Veterinary clinic client core
//!
//! This crate holds the parts of the AuVet clinic client that carry real
//! rules: CPF/CNPJ validation and formatting, and the login flow that
//! resolves a user's role and clinic before a session becomes usable.
//! The auth and backend REST APIs are reached through ports so the flow
//! can run against HTTP adapters or in-memory doubles.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
