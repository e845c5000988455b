use std::process;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use devtoken_cli::commands::EXIT_SUCCESS;
use devtoken_cli::logging::init_logging;
use devtoken_cli::{Config, TokenCommands};
use devtoken_security::TokenService;
use devtoken_storage::SqliteTokenStore;

#[derive(Parser)]
#[command(name = "devtoken")]
#[command(about = "Issue and verify developer access tokens")]
#[command(version)]
struct Cli {
    /// SQLite database URL (overrides DEVTOKEN_DATABASE_URL)
    #[arg(long, global = true)]
    database: Option<String>,

    #[command(subcommand)]
    command: TokenCommands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    let config = Config::from_env(cli.database.as_deref()).context("Invalid configuration")?;
    debug!(database = %config.database_url, "Opening token database");

    let store = SqliteTokenStore::connect(&config.database_url)
        .await
        .with_context(|| format!("Failed to open token database {}", config.database_url))?;
    let service = TokenService::new(Arc::new(store), config.hashing)
        .context("Failed to initialize token service")?;

    let mut stdout = std::io::stdout();
    let code = cli.command.execute(&service, &mut stdout).await?;
    info!(exit_code = code, "Token command finished");

    if code != EXIT_SUCCESS {
        process::exit(code);
    }
    Ok(())
}
