// Leaf widgets
pub mod badge;
pub mod spinner;

// Layout
pub mod container;
pub mod nav_tab;

pub use badge::*;
pub use container::*;
pub use nav_tab::*;
pub use spinner::*;
