//! gitbar core - pure dispatch logic with no process or filesystem access
//!
//! This crate maps toolbar commands to concrete process invocations. It owns
//! the domain types, the ports (interfaces) for the workspace, tool lookup,
//! process spawning and user notification, and the context resolver and
//! dispatcher that drive them. Spawning processes and touching the
//! filesystem is left to adapters.

pub mod domain;
pub mod ports;
pub mod app;
pub mod error;

// Re-exports for ergonomics
pub use domain::*;
pub use error::*;
pub use app::{ContextResolver, Dispatcher, Outcome};
