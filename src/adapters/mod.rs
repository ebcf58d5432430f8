pub mod fs;
pub mod locator;
pub mod notify;
pub mod spawn;
pub mod workspace;
