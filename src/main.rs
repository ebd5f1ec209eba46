//! MyTrader - Main Entry Point
//!
//! Replays `<SECURITY> <PRICE>` lines from a file or stdin through the
//! threshold strategy.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::BufReader;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use mytrader::common::channels::create_price_channel_with_size;
use mytrader::config::load_config;
use mytrader::price::pump_lines;
use mytrader::{
    LoggingExecutionService, PriceFeed, PriceListener, PriceSource, RecordingExecutionService,
    SharedExecutionService, ThresholdStrategy,
};

/// CLI arguments for the application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long)]
    log_level: Option<String>,

    /// File with price lines; stdin when omitted
    #[arg(short, long)]
    prices: Option<PathBuf>,

    /// Record orders instead of sending them to the broker
    #[arg(long, env = "MYTRADER_DRY_RUN")]
    dry_run: bool,
}

fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    let config = load_config(Some(&args.config)).context("loading configuration")?;

    let level = parse_level(args.log_level.as_deref().unwrap_or(&config.settings.log_level));
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting MyTrader");
    info!("Configuration file: {}", args.config);

    let dry_run = args.dry_run || config.settings.dry_run;
    let recorder = Arc::new(RecordingExecutionService::new());
    let broker: SharedExecutionService = if dry_run {
        recorder.clone() as SharedExecutionService
    } else {
        Arc::new(LoggingExecutionService::new()) as SharedExecutionService
    };

    let strategy = Arc::new(ThresholdStrategy::from_config(broker, &config.strategy)?);
    info!(
        securities = strategy.snapshot().len(),
        lot = strategy.lot(),
        dry_run,
        "Threshold strategy ready"
    );

    let feed = PriceFeed::new();
    let listener: Arc<dyn PriceListener> = strategy.clone();
    feed.add_price_listener(listener.clone());

    let (sender, mut receiver) = create_price_channel_with_size(config.settings.channel_size);

    let reader = match &args.prices {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("opening {}", path.display()))?;
            tokio::spawn(pump_lines(BufReader::new(file), sender))
        }
        None => tokio::spawn(pump_lines(BufReader::new(tokio::io::stdin()), sender)),
    };

    let mut published = 0usize;
    let mut interrupted = false;
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            update = receiver.recv() => match update {
                Some(update) => {
                    feed.publish(&update);
                    published += 1;
                }
                None => break,
            },
            _ = &mut shutdown => {
                info!("Received shutdown signal, cleaning up...");
                interrupted = true;
                break;
            }
        }
    }

    feed.remove_price_listener(&listener);

    let input = if interrupted {
        reader.abort();
        Ok(())
    } else {
        match reader.await? {
            Ok(sent) => {
                info!(sent, published, "Price input finished");
                Ok(())
            }
            Err(e) => Err(e),
        }
    };

    if dry_run {
        for order in recorder.orders() {
            println!(
                "{} {} {} @ {} (notional {:.2})",
                order.side,
                order.volume,
                order.security,
                order.price,
                order.notional()
            );
        }
        info!(orders = recorder.len(), "Dry run complete");
    }

    input.context("reading price input")?;
    Ok(())
}
