//! Trivium test vector binary.
//!
//! # Usage
//!
//! ```bash
//! # Print every built-in ECRYPT vector
//! trivium-vectors
//!
//! # Print one built-in vector
//! trivium-vectors --vector 3
//!
//! # Print a custom key/IV pair
//! trivium-vectors --key "00 53 A6 F9 4C 9F F2 45 98 EB" --iv 0d74db42a91077de45ac
//! ```

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use trivium_vectors::HarnessConfig;

/// Trivium ECRYPT test vector printer
#[derive(Parser, Debug)]
#[command(name = "trivium-vectors")]
#[command(about = "Print Trivium keystream samples in ECRYPT test vector format")]
#[command(version)]
struct Args {
    /// Built-in vector to print (0-based); prints all when omitted
    #[arg(short, long, conflicts_with_all = ["key", "iv"])]
    vector: Option<usize>,

    /// Custom 10-byte key as hex (whitespace allowed)
    #[arg(short, long, requires = "iv")]
    key: Option<String>,

    /// Custom 10-byte IV as hex (whitespace allowed)
    #[arg(short, long, requires = "key")]
    iv: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = HarnessConfig::from_cli(args.vector, args.key.as_deref(), args.iv.as_deref())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    trivium_vectors::run(&config, &mut out)?;

    Ok(())
}
