pub mod menu;
pub mod registry;

pub use crate::domain::model::{Package, ServiceTier};
pub use crate::domain::ports::Console;
pub use crate::utils::error::Result;
