use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::common::traits::{PriceListener, PriceSource};
use crate::common::types::PriceUpdate;

/// In-memory price source that fans each update out to its listeners
#[derive(Default)]
pub struct PriceFeed {
    listeners: RwLock<Vec<Arc<dyn PriceListener>>>,
}

impl PriceFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver an update to every listener in registration order
    ///
    /// A failing listener is logged and skipped. Returns how many listeners
    /// accepted the update.
    pub fn publish(&self, update: &PriceUpdate) -> usize {
        // Clone the list so listeners can (de)register from inside the callback.
        let listeners = self.listeners.read().clone();
        let mut accepted = 0;

        for listener in &listeners {
            match listener.price_update(&update.security, update.price) {
                Ok(()) => accepted += 1,
                Err(e) => warn!(
                    security = %update.security,
                    price = update.price,
                    "Listener rejected price update: {}",
                    e
                ),
            }
        }

        debug!(
            security = %update.security,
            price = update.price,
            accepted,
            "Published price update"
        );
        accepted
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.read().len()
    }
}

impl PriceSource for PriceFeed {
    fn add_price_listener(&self, listener: Arc<dyn PriceListener>) {
        self.listeners.write().push(listener);
    }

    fn remove_price_listener(&self, listener: &Arc<dyn PriceListener>) -> bool {
        let mut listeners = self.listeners.write();
        match listeners.iter().position(|l| Arc::ptr_eq(l, listener)) {
            Some(index) => {
                listeners.remove(index);
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for PriceFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriceFeed")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::errors::{Result, TraderError};
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Collector {
        seen: Mutex<Vec<(String, f64)>>,
    }

    impl PriceListener for Collector {
        fn price_update(&self, security: &str, price: f64) -> Result<()> {
            self.seen.lock().push((security.to_string(), price));
            Ok(())
        }
    }

    struct Failing;

    impl PriceListener for Failing {
        fn price_update(&self, security: &str, _price: f64) -> Result<()> {
            Err(TraderError::InvalidSecurity(security.to_string()))
        }
    }

    #[test]
    fn test_publish_reaches_all_listeners() {
        let feed = PriceFeed::new();
        let a = Arc::new(Collector::default());
        let b = Arc::new(Collector::default());
        feed.add_price_listener(a.clone());
        feed.add_price_listener(b.clone());

        assert_eq!(feed.publish(&PriceUpdate::new("IBM", 54.0)), 2);
        assert_eq!(a.seen.lock().as_slice(), &[("IBM".to_string(), 54.0)]);
        assert_eq!(b.seen.lock().len(), 1);
    }

    #[test]
    fn test_failing_listener_does_not_block_others() {
        let feed = PriceFeed::new();
        let collector = Arc::new(Collector::default());
        feed.add_price_listener(Arc::new(Failing));
        feed.add_price_listener(collector.clone());

        assert_eq!(feed.publish(&PriceUpdate::new("IBM", 1.0)), 1);
        assert_eq!(collector.seen.lock().len(), 1);
    }

    #[test]
    fn test_remove_listener() {
        let feed = PriceFeed::new();
        let listener: Arc<dyn PriceListener> = Arc::new(Collector::default());
        let other: Arc<dyn PriceListener> = Arc::new(Collector::default());
        feed.add_price_listener(listener.clone());

        assert!(!feed.remove_price_listener(&other));
        assert!(feed.remove_price_listener(&listener));
        assert_eq!(feed.listener_count(), 0);
        assert_eq!(feed.publish(&PriceUpdate::new("IBM", 1.0)), 0);
    }
}
