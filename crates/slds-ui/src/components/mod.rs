pub mod badge;
pub mod icon;

pub use badge::*;
pub use icon::*;
