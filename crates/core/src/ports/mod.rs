pub mod workspace;
pub mod tools;
pub mod spawn;
pub mod notify;

// Re-exports
pub use workspace::*;
pub use tools::*;
pub use spawn::*;
pub use notify::*;
