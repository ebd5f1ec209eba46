//! Common test utilities and fixtures

#![allow(dead_code)]

use std::sync::Arc;

use mytrader::{OrderRecord, RecordingExecutionService, Side, ThresholdStrategy};

pub type RecordingStrategy = ThresholdStrategy<Arc<RecordingExecutionService>>;

/// Strategy with IBM buy=55.0 / sell=550.0 and lot 100, plus its broker
pub fn ibm_strategy() -> (Arc<RecordingStrategy>, Arc<RecordingExecutionService>) {
    let broker = Arc::new(RecordingExecutionService::new());
    let strategy = ThresholdStrategy::with_lot(broker.clone(), 100);
    strategy.set_buy_threshold("IBM", 55.0).unwrap();
    strategy.set_sell_threshold("IBM", 550.0).unwrap();
    (Arc::new(strategy), broker)
}

/// Strip timestamps so orders can be compared directly
pub fn order_tuples(orders: &[OrderRecord]) -> Vec<(Side, String, f64, u32)> {
    orders
        .iter()
        .map(|o| (o.side, o.security.clone(), o.price, o.volume))
        .collect()
}

/// Sample configuration file contents
pub const SAMPLE_CONFIG: &str = r#"
[strategy]
lot = 100

[[strategy.thresholds]]
security = "IBM"
buy = 55.0
sell = 550.0

[[strategy.thresholds]]
security = "XYZ"
buy = 100.0
sell = 50.0

[settings]
log_level = "debug"
channel_size = 16
"#;

/// Sample price replay input
pub const SAMPLE_PRICES: &str = "\
# opening prices
IBM 56.0
IBM 54.0
IBM 551.0
XYZ 75.0
not a price
MSFT 1.0
";
