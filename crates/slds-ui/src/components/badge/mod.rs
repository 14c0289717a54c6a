mod component;
mod frame;

pub use component::*;
pub use frame::*;
