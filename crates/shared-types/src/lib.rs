pub mod env_export;
pub mod error;

pub use env_export::*;
pub use error::*;
