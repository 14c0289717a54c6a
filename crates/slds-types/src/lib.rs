pub mod badge;
pub mod class_list;
pub mod config;
pub mod error;
pub mod icon;
pub mod icons;
pub mod style;

pub use badge::*;
pub use class_list::*;
pub use config::*;
pub use error::*;
pub use icon::*;
pub use style::*;
