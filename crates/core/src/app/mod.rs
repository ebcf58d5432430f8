pub mod dispatcher;
pub mod resolver;

pub use dispatcher::*;
pub use resolver::*;
