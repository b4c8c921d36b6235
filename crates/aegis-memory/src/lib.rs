//! Per-user memory for the Aegis chatbot.
//!
//! Tracks keyword usage counts, the user's current interest, and saved
//! favorites, persisted to a line-delimited flat file after every mutation.
//! The user's name is session-only and never written to disk.

pub mod error;
pub mod profile;
pub mod store;

pub use error::MemoryError;
pub use profile::UserProfile;
pub use store::MemoryStore;
