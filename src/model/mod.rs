//! Domain models for moderation decisions and guild discovery.
//!
//! These are short-lived values derived from Discord events and API
//! responses. Nothing here is persisted or mutated after construction.

pub mod discord;
pub mod message;
