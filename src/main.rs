//! snmp-confgen
//!
//! Renders the SNMP monitoring daemon's configuration file from two inputs:
//! host facts resolved through sysctl plus the on-disk version file, and the
//! SNMP service record fetched from the management daemon. Writing the file
//! into place and restarting the daemon stay with the service supervisor;
//! this binary only produces the text.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

mod app;
mod facts;
mod middleware;
mod render;

use app::cli::Args;
use facts::{HostFacts, SysctlSource};
use middleware::MidcltClient;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    app::logging::init_tracing(&args.log_level);

    let source = SysctlSource::new();
    let client = MidcltClient::new();

    let facts = HostFacts::gather(&source, Path::new(facts::VERSION_FILE))
        .await
        .context("gathering host facts")?;
    let config = middleware::fetch_resolved(&client)
        .await
        .context("fetching SNMP service configuration")?;
    debug!(
        "Resolved config: v3={}, freenas={}",
        config.v3, config.is_freenas_system
    );

    let rendered = render::render(&facts, &config);
    info!("Rendered {} bytes of configuration", rendered.len());

    if args.check {
        return Ok(());
    }

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, &rendered)
                .await
                .with_context(|| format!("writing {}", path.display()))?;
            info!("Configuration written to {}", path.display());
        }
        None => {
            std::io::stdout()
                .write_all(rendered.as_bytes())
                .context("writing to stdout")?;
        }
    }

    Ok(())
}
