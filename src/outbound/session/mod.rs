//! Session store adapters.
//!
//! The session is a single serialized [`crate::domain::User`] under one
//! fixed key, mirroring the reference system's lone browser-storage entry.
//! [`MemorySessionStore`] keeps it in-process; [`JsonFileSessionStore`]
//! persists it across restarts.

mod json_file;
mod memory;

pub use json_file::JsonFileSessionStore;
pub use memory::MemorySessionStore;

/// Fixed key the current user is stored under.
pub const SESSION_KEY: &str = "estia.currentUser";
