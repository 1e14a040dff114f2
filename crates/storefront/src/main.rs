//! APEXFIT session replay.
//!
//! Replays a JSON script of user actions against a fresh page session and
//! writes the final drawer markup (or the cart snapshot) to stdout.
//!
//! # Usage
//!
//! ```bash
//! apexfit-session journeys/checkout.json
//! apexfit-session --json journeys/checkout.json
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use apexfit_storefront::config::StorefrontConfig;
use apexfit_storefront::error::{Result, report};
use apexfit_storefront::session::PageSession;
use apexfit_storefront::telemetry;
use clap::Parser;

#[derive(Parser)]
#[command(name = "apexfit-session")]
#[command(author, version, about = "Replay a storefront cart session")]
struct Cli {
    /// Path to a JSON array of session steps
    script: PathBuf,

    /// Print the final cart snapshot as JSON instead of the drawer markup
    #[arg(long)]
    json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            telemetry::init_tracing(telemetry::LogFormat::default());
            report(&e, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    // Sentry must be initialized before the tracing subscriber
    let _sentry_guard = telemetry::init_sentry(&config);
    telemetry::init_tracing(config.log_format);

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e, "Session replay failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, config: StorefrontConfig) -> Result<()> {
    let script = tokio::fs::read_to_string(&cli.script).await?;
    let steps = PageSession::parse_script(&script)?;
    tracing::info!(steps = steps.len(), script = %cli.script.display(), "Replaying session");

    let mut session = PageSession::new(config);
    session.replay(steps).await?;

    let output = if cli.json {
        serde_json::to_string_pretty(session.controller().snapshot())?
    } else {
        session.controller().surface().drawer_html().to_string()
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}")?;

    session.end();
    Ok(())
}
