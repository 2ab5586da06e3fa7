//! Storage Adapters
//!
//! Implementations of the SessionStore port.
//!
//! ## Available Adapters
//!
//! - **FileSessionStore** - Active clinic on disk, token in memory
//! - **InMemorySessionStore** - Everything in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use auvet::adapters::storage::{FileSessionStore, InMemorySessionStore};
//!
//! // CLI: remember the last clinic between runs
//! let store = FileSessionStore::new(".auvet/session.json");
//!
//! // Testing: in-memory storage
//! let store = InMemorySessionStore::new();
//! ```

mod file_session_store;
mod in_memory_session_store;

pub use file_session_store::FileSessionStore;
pub use in_memory_session_store::InMemorySessionStore;
