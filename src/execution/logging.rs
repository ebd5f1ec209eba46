use tracing::info;

use crate::common::traits::ExecutionService;

/// Execution service that only logs each order
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingExecutionService;

impl LoggingExecutionService {
    pub fn new() -> Self {
        Self
    }
}

impl ExecutionService for LoggingExecutionService {
    fn buy(&self, security: &str, price: f64, volume: u32) {
        info!(side = "BUY", security, price, volume, "Order placed");
    }

    fn sell(&self, security: &str, price: f64, volume: u32) {
        info!(side = "SELL", security, price, volume, "Order placed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn test_logs_without_panicking() {
        let broker = LoggingExecutionService::new();
        broker.buy("IBM", 54.0, 100);
        broker.sell("IBM", 551.0, 100);
    }
}
