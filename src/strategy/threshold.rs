use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::common::errors::{ensure_security, Result};
use crate::common::traits::{ExecutionService, PriceListener};
use crate::config::types::{StrategyConfig, DEFAULT_LOT};
use crate::strategy::book::{ThresholdBook, Triggers};

/// Mean reversion strategy driven by per-security price levels
///
/// Buys when a price falls below the security's buy level and sells when it
/// rises above the sell level, always for the current lot size. Levels and
/// lot can be changed at any time from another thread; each price update
/// evaluates against a single consistent view of them.
///
/// # Example
///
/// ```ignore
/// let strategy = ThresholdStrategy::new(broker);
/// strategy.set_buy_threshold("IBM", 55.0)?;
/// strategy.set_sell_threshold("IBM", 550.0)?;
/// strategy.on_price_update("IBM", 54.0)?; // broker.buy("IBM", 54.0, 100)
/// ```
pub struct ThresholdStrategy<E: ExecutionService> {
    broker: E,
    book: RwLock<ThresholdBook>,
}

impl<E: ExecutionService> ThresholdStrategy<E> {
    /// Create a strategy with no levels and the default lot of 100
    pub fn new(broker: E) -> Self {
        Self::with_lot(broker, DEFAULT_LOT)
    }

    /// Create a strategy with no levels and the given lot
    pub fn with_lot(broker: E, lot: u32) -> Self {
        Self {
            broker,
            book: RwLock::new(ThresholdBook::new(lot)),
        }
    }

    /// Create a strategy seeded from configuration
    pub fn from_config(broker: E, config: &StrategyConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            broker,
            book: RwLock::new(ThresholdBook::from_config(config)),
        })
    }

    /// Evaluate a price update and place at most one buy and one sell
    ///
    /// The lock is released before the broker is called, so the broker may
    /// call back into the strategy.
    pub fn on_price_update(&self, security: &str, price: f64) -> Result<Triggers> {
        if let Err(e) = ensure_security(security) {
            warn!(price, "Rejected price update: {}", e);
            return Err(e);
        }

        let (triggers, lot) = {
            let book = self.book.read();
            (book.evaluate(security, price), book.lot())
        };

        debug!(
            security,
            price,
            buy = triggers.buy,
            sell = triggers.sell,
            lot,
            "Evaluated price update"
        );

        if triggers.buy {
            self.broker.buy(security, price, lot);
        }
        if triggers.sell {
            self.broker.sell(security, price, lot);
        }

        Ok(triggers)
    }

    /// Set the level below which a buy is placed, replacing any previous one
    ///
    /// No check is made against the sell level.
    pub fn set_buy_threshold(&self, security: &str, threshold: f64) -> Result<Option<f64>> {
        ensure_security(security)?;
        let previous = self.book.write().set_buy(security, threshold);
        debug!(security, threshold, ?previous, "Buy threshold set");
        Ok(previous)
    }

    /// Set the level above which a sell is placed, replacing any previous one
    ///
    /// No check is made against the buy level.
    pub fn set_sell_threshold(&self, security: &str, threshold: f64) -> Result<Option<f64>> {
        ensure_security(security)?;
        let previous = self.book.write().set_sell(security, threshold);
        debug!(security, threshold, ?previous, "Sell threshold set");
        Ok(previous)
    }

    /// Remove all buy and sell levels in one step; the lot is unchanged
    pub fn clear_thresholds(&self) {
        self.book.write().clear();
        debug!("Thresholds cleared");
    }

    pub fn buy_threshold(&self, security: &str) -> Option<f64> {
        self.book.read().buy_threshold(security)
    }

    pub fn sell_threshold(&self, security: &str) -> Option<f64> {
        self.book.read().sell_threshold(security)
    }

    pub fn lot(&self) -> u32 {
        self.book.read().lot()
    }

    /// Change the lot used by orders placed from now on
    pub fn set_lot(&self, lot: u32) {
        self.book.write().set_lot(lot);
        debug!(lot, "Lot size set");
    }

    /// Copy of the current levels and lot
    pub fn snapshot(&self) -> ThresholdBook {
        self.book.read().clone()
    }
}

impl<E: ExecutionService> PriceListener for ThresholdStrategy<E> {
    fn price_update(&self, security: &str, price: f64) -> Result<()> {
        self.on_price_update(security, price).map(|_| ())
    }
}

impl<E: ExecutionService> std::fmt::Debug for ThresholdStrategy<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThresholdStrategy")
            .field("book", &*self.book.read())
            .finish_non_exhaustive()
    }
}
