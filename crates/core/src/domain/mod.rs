pub mod command;
pub mod context;
pub mod invocation;
pub mod notification;

// Re-exports for convenience
pub use command::*;
pub use context::*;
pub use invocation::*;
pub use notification::*;
