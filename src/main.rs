//! Entry point: parse CLI, set up logging, and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use dota_fantasy::{
    cli::{Commands, DotaFantasy},
    commands::{breakdown::handle_breakdown, draft::handle_draft, teams::handle_teams},
};
use tracing::Level;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = DotaFantasy::parse();
    init_logging(app.verbose);

    match app.command {
        Commands::Breakdown { common } => handle_breakdown(common)
            .await
            .context("breakdown failed")?,

        Commands::Teams { common } => handle_teams(common).await.context("teams failed")?,

        Commands::Draft {
            common,
            selections,
            interactive,
        } => handle_draft(common, selections, interactive)
            .await
            .context("draft failed")?,
    }

    Ok(())
}
