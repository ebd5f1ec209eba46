//! End-to-end: config file, replayed price lines, channel, feed, strategy

mod common;

use std::io::Write;
use std::sync::Arc;

use common::{order_tuples, SAMPLE_CONFIG, SAMPLE_PRICES};
use mytrader::common::channels::create_price_channel_with_size;
use mytrader::config::load_config;
use mytrader::price::pump_lines;
use mytrader::{PriceFeed, PriceSource, RecordingExecutionService, Side, ThresholdStrategy};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_replay_through_feed() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(SAMPLE_CONFIG.as_bytes()).unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let config = load_config(Some(&path)).unwrap();
    assert_eq!(config.settings.channel_size, 16);

    let broker = Arc::new(RecordingExecutionService::new());
    let strategy = Arc::new(ThresholdStrategy::from_config(broker.clone(), &config.strategy).unwrap());

    let feed = PriceFeed::new();
    feed.add_price_listener(strategy.clone());

    let (sender, mut receiver) = create_price_channel_with_size(config.settings.channel_size);
    let pump = tokio::spawn(pump_lines(SAMPLE_PRICES.as_bytes(), sender));

    while let Some(update) = receiver.recv().await {
        feed.publish(&update);
    }
    assert_eq!(pump.await.unwrap().unwrap(), 5);

    assert_eq!(
        order_tuples(&broker.orders()),
        vec![
            (Side::Buy, "IBM".to_string(), 54.0, 100),
            (Side::Sell, "IBM".to_string(), 551.0, 100),
            (Side::Buy, "XYZ".to_string(), 75.0, 100),
            (Side::Sell, "XYZ".to_string(), 75.0, 100),
        ]
    );
}
