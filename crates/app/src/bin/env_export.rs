use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use shared_types::{ExportRequest, DEFAULT_ENV_FILE, DEFAULT_KEYS};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Print `export` lines for entries of a dotenv file.
///
/// Meant to be evaluated by the calling shell: `eval "$(env-export)"`.
#[derive(Parser, Debug)]
#[command(name = "env-export")]
#[command(version)]
#[command(about = "Export selected dotenv entries into the calling shell")]
struct Args {
    /// Dotenv file to read
    #[arg(short, long, default_value = DEFAULT_ENV_FILE)]
    file: PathBuf,

    /// Variable to export; repeat for several (defaults to HOST and PORT)
    #[arg(short, long = "key", value_name = "KEY")]
    keys: Vec<String>,

    /// Skip variables missing from the file instead of failing
    #[arg(long)]
    optional: bool,

    /// Fail on missing HOST, PORT, LOG_LEVEL, ... instead of using the server defaults
    #[arg(long)]
    no_defaults: bool,
}

impl Args {
    fn into_request(self) -> ExportRequest {
        let keys = if self.keys.is_empty() {
            DEFAULT_KEYS.iter().map(|key| key.to_string()).collect()
        } else {
            self.keys
        };
        ExportRequest {
            path: self.file,
            keys,
            optional: self.optional,
            defaults: !self.no_defaults,
        }
    }
}

fn main() -> Result<()> {
    // stdout is reserved for the export lines
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let request = Args::parse().into_request();
    let exports = request
        .run()
        .with_context(|| format!("failed to export from {}", request.path.display()))?;

    let mut out = std::io::stdout().lock();
    for export in &exports {
        writeln!(out, "{}", export.to_shell())?;
    }
    tracing::debug!(count = exports.len(), "exported variables");
    Ok(())
}
