mod component;
mod header;
pub use component::*;
pub use header::*;
