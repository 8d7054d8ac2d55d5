pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::StdConsole, CliConfig};
pub use core::{menu::MenuSession, registry::PackageRegistry};
pub use domain::model::{Package, ServiceTier};
pub use domain::ports::Console;
pub use utils::error::{CourierError, Result};
