//! CLI administration tool for shortlink.
//!
//! Talks to the configured mapping store directly, without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- shorten https://example.com/some/long/path
//!
//! # Look up where a code points
//! cargo run --bin admin -- resolve Xy3abQ
//!
//! # Check store connectivity
//! cargo run --bin admin -- store check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `STORAGE_BACKEND`, `REDIS_URL`, `BASE_URL`, `MAX_ATTEMPTS`.
//! With `STORAGE_BACKEND=memory` every invocation starts from an empty store.

use shortlink::ShortenerError;
use shortlink::config::{self, Config};
use shortlink::server;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for managing shortlink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Create a short code for a URL
    Shorten {
        /// Absolute http(s) URL
        url: String,
    },

    /// Show the URL a short code points to
    Resolve {
        /// Six-character short code
        code: String,
    },

    /// Store operations
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
}

/// Store diagnostic subcommands.
#[derive(Subcommand)]
enum StoreAction {
    /// Check store connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;

    match cli.command {
        Commands::Shorten { url } => shorten(&config, &url).await?,
        Commands::Resolve { code } => resolve(&config, &code).await?,
        Commands::Store { action } => handle_store_action(action, &config).await?,
    }

    Ok(())
}

async fn shorten(config: &Config, url: &str) -> Result<()> {
    let store = server::build_store(config).await?;
    let shortener = server::build_shortener(store, config);

    match shortener.shorten(url).await {
        Ok(code) => {
            println!("{}", "✅ Short URL created".green().bold());
            println!();
            println!("  Code:      {}", code.as_str().bright_yellow().bold());
            println!("  Short URL: {}{}", config.base_url, code.as_str().cyan());
            println!("  Target:    {}", url.bright_white());
            println!();
            Ok(())
        }
        Err(ShortenerError::Validation(reason)) => {
            println!("{} {}", "❌ Invalid URL:".red().bold(), reason);
            std::process::exit(2);
        }
        Err(e) => Err(anyhow::anyhow!("Failed to shorten URL: {}", e)),
    }
}

async fn resolve(config: &Config, code: &str) -> Result<()> {
    let store = server::build_store(config).await?;
    let shortener = server::build_shortener(store, config);

    match shortener.resolve(code).await {
        Ok(long_url) => {
            println!("  {} → {}", code.bright_yellow(), long_url.bright_white());
            Ok(())
        }
        Err(ShortenerError::NotFound(_)) => {
            println!("{} {}", "❌ No mapping for".red().bold(), code.yellow());
            std::process::exit(1);
        }
        Err(e) => Err(anyhow::anyhow!("Failed to resolve code: {}", e)),
    }
}

/// Handles store diagnostic commands.
async fn handle_store_action(action: StoreAction, config: &Config) -> Result<()> {
    match action {
        StoreAction::Check => {
            println!(
                "{} {}",
                "🔍 Checking store connection...".bright_blue(),
                config.storage_backend.to_string().bright_black()
            );

            let store = server::build_store(config).await?;

            if store.health_check().await {
                println!("{}", "✅ Store connection OK".green().bold());
            } else {
                println!("{}", "❌ Store is not responding".red().bold());
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
