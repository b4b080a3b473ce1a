//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **remote**: reqwest-backed transport to the remote authority
//!
//! Adapters are thin translators between domain types and wire
//! representations. They contain no business logic.

pub mod remote;
