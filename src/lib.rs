pub mod args;
mod error;
pub mod model;
pub mod server;

pub use error::Error;
pub use error::Result;
