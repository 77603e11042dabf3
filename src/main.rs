//! ChainOpera agent service - health check and placeholder prediction over HTTP

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;

use chainopera_agent::api::{self, ApiDoc};
use chainopera_agent::config::Config;

#[derive(Parser)]
#[command(name = "chainopera-agent")]
#[command(about = "Agent service for ChainOpera integration - health check and placeholder prediction endpoint")]
#[command(version)]
struct Cli {
    /// Path to a config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,
    },

    /// Print the OpenAPI document to stdout
    Openapi,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("chainopera_agent={},tower_http=debug", log_level).into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    let _ = dotenvy::dotenv();

    // Load config
    let mut config = if let Some(path) = &cli.config {
        Config::load_from_file(path)?
    } else {
        Config::load()?
    };

    match cli.command {
        Commands::Serve { port, host } => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(host) = host {
                config.host = host;
            }

            tracing::info!("Starting HTTP server on {}", config.bind_addr());

            let router = api::create_router();
            let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;

            println!("Agent running at http://{}", config.bind_addr());
            println!("  Health:   http://localhost:{}/health", config.port);
            println!("  Predict:  POST http://localhost:{}/predict", config.port);
            println!("  API Docs: http://localhost:{}/api/docs", config.port);

            axum::serve(listener, router).await?;
        }

        Commands::Openapi => {
            println!("{}", ApiDoc::openapi().to_pretty_json()?);
        }
    }

    Ok(())
}
