mod config;
mod graphql;
mod http;

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use platform_db::demo_dataset;
use platform_obs::{ObsConfig, init_tracing};
use tracing::info;

use crate::{
    config::AppConfig,
    http::{AppState, ServeConfig},
};

#[derive(Parser, Debug)]
#[command(name = "workforce-server", version, about = "Workforce directory server")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP + GraphQL server.
    Serve(ServeCommand),
    /// Print dashboard statistics for a freshly built store as JSON.
    Stats,
    /// Print the demo dataset as JSON.
    Seed,
    /// Print the GraphQL schema snapshot.
    #[command(name = "schema:print")]
    SchemaPrint {
        #[arg(long, value_name = "FILE", help = "Destination file path")]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct ServeCommand {
    #[arg(long, default_value = "0.0.0.0")]
    host: std::net::IpAddr,
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

impl From<ServeCommand> for ServeConfig {
    fn from(value: ServeCommand) -> Self {
        ServeConfig::new(value.host, value.port)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing(ObsConfig::from_env()?)?;
    let cli = Cli::parse();
    let app_config = Arc::new(AppConfig::load()?);
    match cli.command {
        Command::Serve(cmd) => run_server(cmd, app_config).await,
        Command::Stats => print_stats(&app_config).await,
        Command::Seed => print_seed(),
        Command::SchemaPrint { output } => schema_print(output),
    }
}

async fn run_server(cmd: ServeCommand, config: Arc<AppConfig>) -> Result<()> {
    let store = config.store.build_store();
    info!(
        seeded = config.store.seed,
        simulated_latency = config.store.simulated_latency,
        "record store ready"
    );
    let state = AppState {
        schema: graphql::build_schema(store.clone()),
        store,
        config,
    };
    http::serve(cmd.into(), state).await
}

async fn print_stats(config: &AppConfig) -> Result<()> {
    let stats = config.store.build_store().dashboard_stats().await;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

fn print_seed() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&demo_dataset())?);
    Ok(())
}

fn schema_print(path: Option<PathBuf>) -> Result<()> {
    let target = path.unwrap_or_else(|| PathBuf::from("schema.graphql"));
    std::fs::write(&target, graphql::schema_sdl())
        .with_context(|| format!("failed to write {}", target.display()))?;
    info!(path = %target.display(), "schema snapshot written");
    Ok(())
}
