//! GitHub Profile Viewer - look up a GitHub user and see their profile,
//! recent commits and a commit-frequency heatmap.
//!
//! # Usage
//! ```bash
//! TOKEN=ghp_... gh-profile-viewer          # Start server on 127.0.0.1:5000
//! gh-profile-viewer --port 8080 --open     # Start and open browser
//! ```
//!
//! The token may also live in a `.env` file next to the binary's working
//! directory.

mod error;
mod github;
mod heatmap;
mod models;
mod routes;
mod views;

use std::sync::Arc;

use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use github::{Aggregator, GithubClient};

/// GitHub Profile Viewer - Browse a GitHub user's activity in your browser
#[derive(Parser)]
#[command(name = "gh-profile-viewer")]
#[command(about = "Renders a GitHub user's profile and commit heatmap", long_about = None)]
struct Cli {
    /// GitHub token used for the GraphQL API
    #[arg(long, env = "TOKEN", hide_env_values = true)]
    token: String,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to run the server on
    #[arg(short, long, default_value = "5000")]
    port: u16,

    /// Open browser automatically after starting
    #[arg(short, long)]
    open: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; TOKEN may come from the environment or --token
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn,gh_profile_viewer=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if cli.token.trim().is_empty() {
        eprintln!("✗ TOKEN is empty");
        eprintln!("  Set TOKEN in the environment or in a .env file, or pass --token");
        std::process::exit(1);
    }

    let client = GithubClient::new(cli.token.trim())?;
    let aggregator = Arc::new(Aggregator::new(client));

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::create_router(aggregator)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("✗ Failed to bind to {}: {}", addr, e);
            eprintln!("  Try a different port with --port <PORT>");
            std::process::exit(1);
        }
    };

    let url = format!("http://{}", addr);
    println!();
    println!("  ┌─────────────────────────────────────────────┐");
    println!("  │             GitHub Profile Viewer           │");
    println!("  └─────────────────────────────────────────────┘");
    println!();
    println!("  Server:     {}", url);
    println!();
    println!("  Press Ctrl+C to stop");
    println!();
    tracing::info!("Listening on {}", addr);

    if cli.open {
        if let Err(e) = open::that(&url) {
            eprintln!("  Warning: Could not open browser: {}", e);
        }
    }

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
        println!("\n  Shutting down...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
