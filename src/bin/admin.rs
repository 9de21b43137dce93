//! CLI administration tool for link-tracker.
//!
//! Registers links, prints statistics and runs database diagnostics without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Register a link
//! cargo run --bin admin -- link create abc https://example.com
//!
//! # All-time clicks for one link
//! cargo run --bin admin -- link show abc
//!
//! # Daily breakdown
//! cargo run --bin admin -- link daily abc
//!
//! # 24h / 7d / all-time table for every link
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` (or the `DB_*`/`PG*` parts) and
//! `STATS_TIMEZONE`.

use link_tracker::application::services::{LinkService, StatsService};
use link_tracker::config::{self, Config};
use link_tracker::infrastructure::persistence::{PgLinkRepository, PgStatsRepository};
use link_tracker::server::connect_pool;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing link-tracker.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage tracking links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show 24h / 7d / all-time clicks for every link
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Register a new tracking link
    Create {
        /// Short code (e.g., "spring-promo")
        code: String,

        /// Destination URL
        destination: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show all-time clicks for a link
    Show { code: String },

    /// Show clicks per calendar day for a link
    Daily { code: String },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &pool, &config).await?,
        Commands::Stats => handle_stats(&pool, &config).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    pool.close().await;
    Ok(())
}

fn link_service(pool: &PgPool) -> LinkService {
    LinkService::new(Arc::new(PgLinkRepository::new(Arc::new(pool.clone()))))
}

fn stats_service(pool: &PgPool, config: &Config) -> StatsService {
    StatsService::new(
        Arc::new(PgStatsRepository::new(Arc::new(pool.clone()))),
        config.stats_timezone,
    )
}

/// Dispatches link commands.
async fn handle_link_action(action: LinkAction, pool: &PgPool, config: &Config) -> Result<()> {
    match action {
        LinkAction::Create {
            code,
            destination,
            yes,
        } => create_link(&link_service(pool), code, destination, yes).await?,
        LinkAction::Show { code } => show_link(&stats_service(pool, config), &code).await?,
        LinkAction::Daily { code } => show_daily(&stats_service(pool, config), &code).await?,
    }

    Ok(())
}

/// Registers a link after an optional confirmation prompt.
async fn create_link(
    service: &LinkService,
    code: String,
    destination: String,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔗 Create Tracking Link".bright_blue().bold());
    println!();
    println!("  Link:        {}", code.cyan());
    println!("  Destination: {}", destination.bright_white());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this link?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let link = service
        .create_link(code, destination)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", format!("✅ Tracking link created: {}", link.code).green().bold());
    println!();

    Ok(())
}

/// Prints all-time clicks for one link.
async fn show_link(service: &StatsService, code: &str) -> Result<()> {
    let stats = service
        .link_stats(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load link '{}': {}", code, e))?;

    println!("{}", "📊 Link".bright_blue().bold());
    println!();
    println!("  Link:        {}", stats.code.cyan());
    println!("  Destination: {}", stats.destination.bright_white());
    println!(
        "  Clicks:      {}",
        stats.clicks.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Prints one row per calendar day between the first and last click.
///
/// # Output Format
///
/// ```text
/// 📅 Daily clicks for abc (Europe/Berlin)
///
///   Date         Clicks
///   ───────────────────
///   2025-03-01   4
///   2025-03-02   0
///   2025-03-03   1
/// ```
async fn show_daily(service: &StatsService, code: &str) -> Result<()> {
    let days = service
        .daily_stats(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load daily stats: {}", e))?;

    println!(
        "{}",
        format!(
            "📅 Daily clicks for {} ({})",
            code,
            service.timezone().name()
        )
        .bright_blue()
        .bold()
    );
    println!();

    if days.is_empty() {
        println!("{}", "  No clicks recorded".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<12} {}",
        "Date".bright_white().bold(),
        "Clicks".bright_white().bold()
    );
    println!("  {}", "─".repeat(19).bright_black());

    for day in &days {
        let clicks = if day.clicks == 0 {
            day.clicks.to_string().bright_black()
        } else {
            day.clicks.to_string().bright_green()
        };
        println!("  {:<12} {}", day.date.to_string(), clicks);
    }
    println!();

    Ok(())
}

/// Displays windowed statistics for every link.
///
/// # Output Format
///
/// ```text
/// 📊 Statistics
///
///   Link                 24h      7d       All time Destination
///   ───────────────────────────────────────────────────────────────────────────
///   abc                  2        5        12       https://example.com
/// ```
async fn handle_stats(pool: &PgPool, config: &Config) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links = stats_service(pool, config)
        .all_link_stats()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load statistics: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} admin link create <code> <destination>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<20} {:<8} {:<8} {:<8} {}",
        "Link".bright_white().bold(),
        "24h".bright_white().bold(),
        "7d".bright_white().bold(),
        "All time".bright_white().bold(),
        "Destination".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<20} {:<8} {:<8} {:<8} {}",
            link.code.cyan(),
            link.clicks_24h,
            link.clicks_7d,
            link.clicks_all_time,
            link.destination.bright_black()
        );
    }

    let total: i64 = links.iter().map(|l| l.clicks_all_time).sum();
    println!();
    println!(
        "  Links: {}   Clicks: {}",
        links.len().to_string().bright_white().bold(),
        total.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
                .fetch_one(pool)
                .await?;

            let clicks: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM click_events")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL:   {}", version.bright_white());
            println!("  Links:        {}", links.to_string().bright_green());
            println!("  Click events: {}", clicks.to_string().bright_green());
            println!();
        }
    }

    Ok(())
}
