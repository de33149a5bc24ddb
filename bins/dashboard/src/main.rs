//! Vendra dashboard CLI.
//!
//! Loads a dashboard snapshot from JSON, derives the per-category metrics,
//! and prints one formatted card per logical category.
//!
//! Usage: cargo run --bin dashboard -- <snapshot.json> [YYYY-MM-DD]
//!
//! The optional second argument overrides "today"; when omitted, the
//! current calendar date in the configured reporting time zone is used.

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vendra_core::metrics::{DashboardService, DashboardSnapshot, MetricCard, status_label};
use vendra_shared::AppConfig;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dashboard=debug,vendra_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;
    let time_zone = config.dashboard.resolve_time_zone()?;

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .context("Usage: dashboard <snapshot.json> [YYYY-MM-DD]")?;
    let today = match args.next() {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .with_context(|| format!("Invalid date override: {raw}"))?,
        None => Utc::now().with_timezone(&time_zone).date_naive(),
    };

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read snapshot: {path}"))?;
    let snapshot: DashboardSnapshot =
        serde_json::from_str(&raw).context("Failed to parse snapshot")?;

    info!(
        store = %snapshot.store.id,
        region = %snapshot.store.region,
        period = %snapshot.period.name,
        %today,
        time_zone = %time_zone,
        "Deriving dashboard metrics"
    );

    let results = DashboardService::derive_metrics(&snapshot, today);

    println!(
        "{} — {} (dias restantes: {})",
        snapshot.period.name,
        today.format("%d/%m/%Y"),
        results.first().map_or(1, |r| r.remaining_days),
    );
    for card in results.iter().map(MetricCard::from_result) {
        print_card(&card);
    }

    Ok(())
}

fn print_card(card: &MetricCard) {
    println!();
    println!("{} [{}]", card.title, status_label(card.status));
    println!("  vendas hoje:    {}", card.today_sales);
    println!("  vendas período: {}", card.period_sales);
    println!("  meta:           {}", card.target);
    println!("  meta diária:    {}", card.daily_target);
    println!("  falta hoje:     {}", card.missing_today);
}
