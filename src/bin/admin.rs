//! CLI administration tool for linkforge.
//!
//! Works directly on the link store file, so the server does not need to be
//! running. Avoid writing while the server is up: the last writer wins.
//!
//! # Usage
//!
//! ```bash
//! # List every stored link
//! cargo run --bin admin -- links list
//!
//! # Show one link
//! cargo run --bin admin -- links show MyLink7
//!
//! # Create a link that expires in 30 days
//! cargo run --bin admin -- links add https://example.com/docs --days 30 --code docs
//!
//! # Remove expired links
//! cargo run --bin admin -- links purge
//! ```
//!
//! # Environment Variables
//!
//! Reads the same variables as the server (`STORE_PATH`, `BASE_URL`,
//! `CODE_LENGTH`, `RUST_LOG`, `LOG_FORMAT`, ...). `--store` overrides
//! `STORE_PATH`. Logging defaults to `warn` when `RUST_LOG` is unset.

use linkforge::application::services::LinkStore;
use linkforge::config::Config;
use linkforge::domain::entities::ShortLink;
use linkforge::telemetry;
use linkforge::utils::url_normalizer::normalize_url;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing linkforge links.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path of the JSON link store (overrides STORE_PATH)
    #[arg(short, long, global = true)]
    store: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage short links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },
}

#[derive(Subcommand)]
enum LinkAction {
    /// List all links, newest first
    List,

    /// Show a single link
    Show {
        /// Short code to look up
        code: String,
    },

    /// Create a short link
    Add {
        /// Destination URL
        url: String,

        /// Days until the link expires
        #[arg(short, long)]
        days: Option<u32>,

        /// Custom short code
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Delete expired links
    Purge {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env_with_log_default("warn");
    if let Some(store) = cli.store {
        config.store_path = store;
    }
    config.validate()?;

    telemetry::init_tracing(&config.log_level, &config.log_format);

    let store = LinkStore::open(config.repository(), config.store_settings())
        .await
        .with_context(|| format!("Failed to open link store '{}'", config.store_path))?;

    match cli.command {
        Commands::Links { action } => handle_link_action(action, &store).await?,
    }

    Ok(())
}

async fn handle_link_action(action: LinkAction, store: &LinkStore) -> Result<()> {
    match action {
        LinkAction::List => list_links(store).await,
        LinkAction::Show { code } => show_link(store, &code).await,
        LinkAction::Add { url, days, code } => add_link(store, &url, days, code).await,
        LinkAction::Purge { yes } => purge_links(store, yes).await,
    }
}

/// Prints every link as a table.
///
/// ```text
/// 🔗 Links (file:links.json)
///
///   Code         Created            Expires            Status   URL
///   ─────────────────────────────────────────────────────────────────
///   MyLink7      2025-01-15 10:30   never              ACTIVE   https://example.com
/// ```
async fn list_links(store: &LinkStore) -> Result<()> {
    println!(
        "{} {}",
        "🔗 Links".bright_blue().bold(),
        format!("({})", store.describe_storage()).bright_black()
    );
    println!();

    let links = store.list_links().await;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} admin -- links add <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<12} {:<18} {:<18} {:<8} {}",
        "Code".bright_white().bold(),
        "Created".bright_white().bold(),
        "Expires".bright_white().bold(),
        "Status".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    let now = Utc::now();
    let mut expired = 0;

    for link in &links {
        let status = if link.is_expired_at(now) {
            expired += 1;
            "EXPIRED".red()
        } else {
            "ACTIVE".green()
        };

        println!(
            "  {:<12} {:<18} {:<18} {:<8} {}",
            link.short_code.cyan(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            format_expiry(link).bright_black(),
            status,
            link.original_url
        );
    }

    println!();
    println!(
        "  Total: {}  Expired: {}",
        links.len().to_string().bright_white().bold(),
        expired.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn show_link(store: &LinkStore, code: &str) -> Result<()> {
    let link = store
        .list_links()
        .await
        .into_iter()
        .find(|l| l.short_code == code);

    let Some(link) = link else {
        anyhow::bail!("No link with code '{}'", code);
    };

    print_link(&link);
    if link.is_expired() {
        println!("  {}", "This link has expired and no longer redirects.".red());
        println!();
    }

    Ok(())
}

async fn add_link(
    store: &LinkStore,
    url: &str,
    days: Option<u32>,
    code: Option<String>,
) -> Result<()> {
    let original_url =
        normalize_url(url).with_context(|| format!("'{}' is not a valid http(s) URL", url))?;

    let link = store
        .add_link(original_url, days, code)
        .await
        .context("Failed to create link")?;

    println!("{}", "✅ Link created".green().bold());
    print_link(&link);

    Ok(())
}

async fn purge_links(store: &LinkStore, skip_confirm: bool) -> Result<()> {
    let now = Utc::now();
    let expired = store
        .list_links()
        .await
        .iter()
        .filter(|l| l.is_expired_at(now))
        .count();

    if expired == 0 {
        println!("{}", "No expired links to purge".yellow());
        return Ok(());
    }

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete {} expired link(s)?", expired))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let removed = store
        .purge_expired()
        .await
        .context("Failed to purge expired links")?;

    println!(
        "{} {}",
        "🧹 Purged".green().bold(),
        format!("{} expired link(s)", removed).bright_white()
    );

    Ok(())
}

fn print_link(link: &ShortLink) {
    println!();
    println!("  Code:     {}", link.short_code.cyan().bold());
    println!("  Short:    {}", link.short_url.bright_yellow());
    println!("  Target:   {}", link.original_url);
    println!(
        "  Created:  {}",
        link.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("  Expires:  {}", format_expiry(link));
    println!();
}

fn format_expiry(link: &ShortLink) -> String {
    link.expires_at
        .map(|e| e.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "never".to_string())
}
