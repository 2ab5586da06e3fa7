//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `http` - Auth and backend REST APIs (reqwest)
//! - `storage` - Session stores (in-memory, file)
//! - `mock` - In-memory doubles of the remote ports, for tests

pub mod http;
pub mod mock;
pub mod storage;

pub use http::HttpGateways;
pub use storage::{FileSessionStore, InMemorySessionStore};
