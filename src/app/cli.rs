//! Command-line argument definitions (clap).

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "snmp-confgen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "SNMP agent configuration generator", long_about = None)]
pub struct Args {
    // === Output ===
    /// Write the rendered configuration to this path instead of stdout
    #[arg(short = 'o', long, help_heading = "Output")]
    pub output: Option<PathBuf>,

    /// Render and discard; exit status reports success only
    #[arg(long, help_heading = "Output")]
    pub check: bool,

    // === Logging ===
    /// Set log filter (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(long = "log-level", default_value = "warn", help_heading = "Logging")]
    pub log_level: String,
}
