pub mod components;
pub mod identity;

pub use components::*;
pub use identity::*;
