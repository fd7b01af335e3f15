//! CLI entry point for quill-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "quill-rs")]
#[command(version = "0.1.0")]
#[command(about = "A blog content API server backed by Notion", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    #[command(alias = "s")]
    Server {
        /// Port to listen on (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (overrides the config file)
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// List published posts from the content source
    List,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "quill_rs=debug,info"
    } else {
        "quill_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Server { port, ip } => {
            let quill = quill_rs::Quill::new(&base_dir)?;
            let ip = ip.unwrap_or_else(|| quill.config.server.ip.clone());
            let port = port.unwrap_or(quill.config.server.port);

            tracing::info!("Starting server at http://{}:{}", ip, port);
            quill.serve(&ip, port).await?;
        }

        Commands::List => {
            let quill = quill_rs::Quill::new(&base_dir)?;
            quill.list().await?;
        }

        Commands::Version => {
            println!("quill-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
