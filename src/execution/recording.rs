use parking_lot::Mutex;
use tracing::debug;

use crate::common::traits::ExecutionService;
use crate::common::types::{OrderRecord, Side};

/// Execution service that keeps every order in memory
///
/// Used for dry runs and as an inspectable broker in tests.
#[derive(Debug, Default)]
pub struct RecordingExecutionService {
    orders: Mutex<Vec<OrderRecord>>,
}

impl RecordingExecutionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// All orders in the order they were placed
    pub fn orders(&self) -> Vec<OrderRecord> {
        self.orders.lock().clone()
    }

    pub fn buys(&self) -> Vec<OrderRecord> {
        self.by_side(Side::Buy)
    }

    pub fn sells(&self) -> Vec<OrderRecord> {
        self.by_side(Side::Sell)
    }

    pub fn len(&self) -> usize {
        self.orders.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.lock().is_empty()
    }

    /// Drop all recorded orders
    pub fn clear(&self) {
        self.orders.lock().clear();
    }

    fn by_side(&self, side: Side) -> Vec<OrderRecord> {
        self.orders
            .lock()
            .iter()
            .filter(|order| order.side == side)
            .cloned()
            .collect()
    }

    fn record(&self, side: Side, security: &str, price: f64, volume: u32) {
        debug!(%side, security, price, volume, "Recording order");
        self.orders
            .lock()
            .push(OrderRecord::new(side, security, price, volume));
    }
}

impl ExecutionService for RecordingExecutionService {
    fn buy(&self, security: &str, price: f64, volume: u32) {
        self.record(Side::Buy, security, price, volume);
    }

    fn sell(&self, security: &str, price: f64, volume: u32) {
        self.record(Side::Sell, security, price, volume);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let broker = RecordingExecutionService::new();
        assert!(broker.is_empty());

        broker.buy("IBM", 54.0, 100);
        broker.sell("AAPL", 201.0, 10);
        broker.buy("MSFT", 300.0, 1);

        let orders = broker.orders();
        assert_eq!(orders.len(), 3);
        assert_eq!(orders[0].side, Side::Buy);
        assert_eq!(orders[0].security, "IBM");
        assert_eq!(orders[1].side, Side::Sell);
        assert_eq!(orders[1].volume, 10);

        assert_eq!(broker.buys().len(), 2);
        assert_eq!(broker.sells().len(), 1);
    }

    #[test]
    fn test_clear() {
        let broker = RecordingExecutionService::new();
        broker.sell("IBM", 1.0, 1);
        broker.clear();
        assert_eq!(broker.len(), 0);
    }
}
