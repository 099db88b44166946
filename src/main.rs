use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use jobfinder::api::{AppState, create_router};
use jobfinder::api::models::SearchRequest;
use jobfinder::config::CONFIG;
use jobfinder::job_scraper::{JobScraper, ScrapeOutcome};

#[derive(Parser, Debug)]
#[command(version, about = "LinkedIn jobs finder: scrape or mock job search results over HTTP")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API (default)
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Scrape one results page and print the postings as JSON
    Search {
        #[arg(default_value = "")]
        keywords: String,
        #[arg(long, default_value = "Morocco")]
        location: String,
        #[arg(long)]
        remote: bool,
        #[arg(long, default_value = "")]
        experience: String,
        #[arg(long, default_value_t = 25)]
        max_jobs: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber (also picks up records from the log crate)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let cli = Cli::parse();
    let scraper = JobScraper::new(&CONFIG.scraper_config(), &CONFIG.markers()?)
        .context("Failed to set up the job scraper")?;

    match cli.command.unwrap_or(Command::Serve { host: None, port: None }) {
        Command::Serve { host, port } => {
            let host = host.unwrap_or_else(|| CONFIG.host.clone());
            let port = port.unwrap_or(CONFIG.port);
            serve(scraper, &host, port).await
        }
        Command::Search {
            keywords,
            location,
            remote,
            experience,
            max_jobs,
        } => {
            let request = SearchRequest {
                keywords,
                location,
                experience,
                remote,
                max_jobs,
                ..SearchRequest::default()
            };
            match scraper.search(&request.filters()).await {
                ScrapeOutcome::Found(jobs) => {
                    println!("{}", serde_json::to_string_pretty(&jobs)?);
                    Ok(())
                }
                ScrapeOutcome::Failed(reason) => anyhow::bail!("search failed: {reason}"),
            }
        }
    }
}

async fn serve(scraper: JobScraper, host: &str, port: u16) -> Result<()> {
    let state = Arc::new(AppState::new(scraper, CONFIG.mock_delay()));
    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {host}:{port}"))?;

    tracing::info!("{}", "=".repeat(60));
    tracing::info!("LinkedIn Jobs Finder API v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("URL: http://{host}:{port}");
    tracing::info!("{}", "=".repeat(60));

    tokio::select! {
        r = axum::serve(listener, create_router(state)) => {
            r.context("server ended unexpectedly")?;
        },
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("received ctrl+c interrupt, closing server");
        }
    }
    Ok(())
}
