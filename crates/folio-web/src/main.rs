//! folio — portfolio web server
//!
//! Run with: cargo run -p folio-web -- serve

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use folio_common::SiteConfig;
use folio_render::{Page, PageOutput};
use folio_web::state::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Personal portfolio site")]
struct Cli {
    /// Path to folio.toml
    #[arg(long, global = true, env = "FOLIO_CONFIG")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the site over HTTP (default)
    Serve {
        /// Address to listen on, overrides `server.bind`
        #[arg(long)]
        bind: Option<String>,
    },
    /// Print one page's HTML to stdout
    Render {
        /// home, projects or research
        page: Page,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Logs go to stderr so `render` output stays clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,folio_web=debug,folio_render=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => SiteConfig::from_file(path)?,
        None => SiteConfig::load()?,
    };

    match cli.command.unwrap_or(Command::Serve { bind: None }) {
        Command::Serve { bind } => serve(config, bind).await,
        Command::Render { page } => render(config, page),
    }
}

async fn serve(mut config: SiteConfig, bind: Option<String>) -> anyhow::Result<()> {
    if let Some(bind) = bind {
        config.server.bind = bind;
    }
    let addr: SocketAddr = config.server.bind.parse()?;

    info!("Starting folio web server...");
    let state = AppState::from_config(config)?;
    info!(
        projects = state.site.catalog().projects.len(),
        papers = state.site.catalog().papers.len(),
        assets = %state.site.config().assets.dir.display(),
        "content ready"
    );

    let app = folio_web::router::build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🚀 Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn render(config: SiteConfig, page: Page) -> anyhow::Result<()> {
    let state = AppState::from_config(config)?;
    match state.site.render(page, None)? {
        PageOutput::Document(doc) => println!("{}", doc.html),
        PageOutput::Navigate(request) => anyhow::bail!("unexpected navigation to {}", request.target()),
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
