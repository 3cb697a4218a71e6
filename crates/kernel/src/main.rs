//! Ordine menu kernel
//!
//! Serves hook-assembled admin menus over HTTP, or prints them.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use ordine_kernel::cli::{self, ShowOptions};
use ordine_kernel::{AppState, Config, routes};

/// Ordine command line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP server (default).
    Serve,
    /// List declared menus.
    List,
    /// Print one menu as JSON.
    Show {
        /// Menu name.
        menu: String,
        /// Permission granted to the rendering user (repeatable).
        #[arg(long = "permission")]
        permissions: Vec<String>,
        /// Request path used to mark the active item.
        #[arg(long)]
        path: Option<String>,
        /// Print initial and hook items without filtering or sorting.
        #[arg(long)]
        registered: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let args = Args::parse();
    let config = Config::from_env().context("failed to load configuration")?;
    let state = AppState::new(&config)
        .context("failed to initialize application state")?;

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(&config, state).await,
        Command::List => cli::cmd_list(state.menus()),
        Command::Show {
            menu,
            permissions,
            path,
            registered,
        } => cli::cmd_show(
            state.menus(),
            &menu,
            &ShowOptions {
                registered,
                permissions,
                path,
            },
        ),
    }
}

async fn serve(config: &Config, state: AppState) -> Result<()> {
    info!(port = config.port, menus = state.menus().len(), "Starting Ordine");

    let app = routes::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind to address")?;

    info!(%addr, "Server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    // Logs go to stderr so `show` output stays clean JSON.
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
