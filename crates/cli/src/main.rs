use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use signal_core::aggregator::Aggregator;

mod render;

#[derive(Debug, Parser)]
#[command(name = "signal_cli")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Print the raw JSON payload instead of a text summary.
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Look up a company symbol or name and print a suggestion.
    Search {
        /// Ticker (e.g. TSLA) or company name (e.g. Tesla). Prompted for when omitted.
        identifier: Option<String>,
    },

    /// Summarise sentiment of current stock-market news.
    Trends,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = signal_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();
    let aggregator = Aggregator::from_settings(&settings)?;

    let res = match args.command {
        Command::Search { identifier } => {
            let identifier = match identifier {
                Some(s) => s,
                None => prompt_identifier()?,
            };
            run_search(&aggregator, &identifier, args.json).await
        }
        Command::Trends => run_trends(&aggregator, args.json).await,
    };

    if let Err(err) = &res {
        sentry_anyhow::capture_anyhow(err);
        tracing::error!(error = %err, "command failed");
    }
    res
}

async fn run_search(aggregator: &Aggregator, identifier: &str, json: bool) -> anyhow::Result<()> {
    let report = aggregator
        .search(identifier)
        .await
        .with_context(|| format!("search for {identifier:?} failed"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render::search_report(&report));
    }
    Ok(())
}

async fn run_trends(aggregator: &Aggregator, json: bool) -> anyhow::Result<()> {
    let trends = aggregator
        .market_trends()
        .await
        .context("market trends failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&trends)?);
    } else {
        print!("{}", render::market_trends(&trends));
    }
    Ok(())
}

fn prompt_identifier() -> anyhow::Result<String> {
    print!("Enter a company symbol or name (e.g., TSLA or Tesla): ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read identifier from stdin")?;

    let identifier = line.trim().to_string();
    anyhow::ensure!(!identifier.is_empty(), "identifier must be non-empty");
    Ok(identifier)
}

fn init_sentry(settings: &signal_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
