//! # gri
//!
//! Encode, decode and inspect Graph Resource Identifiers.
//!
//! ```bash
//! gri encode -t user -a instance -s protected      # user.null.instance:protected
//! gri decode provider.abcdef.instance:private
//! gri --json decode space.s1.user,u1
//! gri validate group.g1.child,g2:private
//! GRI_ENVIRONMENT=development gri env
//! ```
//!
//! Logs go to stderr; `RUST_LOG` sets the filter and `GRI_LOG_FORMAT=json`
//! switches to JSON lines.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gri_tool::{Cli, execute};

fn main() {
    let log_format = std::env::var("GRI_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "gri=info,gri_tool=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    let cli = Cli::parse();

    let stdout = std::io::stdout();
    if let Err(e) = execute(cli, &mut stdout.lock()) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}
