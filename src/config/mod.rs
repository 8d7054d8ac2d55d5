pub mod cli;

use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "courier-desk")]
#[command(about = "Interactive package-tracking desk: register, sort, and look up parcels")]
pub struct CliConfig {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Preload a few sample packages into the registry")]
    pub sample_data: bool,
}
