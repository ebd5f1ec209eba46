use std::collections::HashMap;

use crate::config::types::{StrategyConfig, DEFAULT_LOT};

/// Which orders a single price update calls for
///
/// Both flags can be set at once when a security's buy level sits above
/// its sell level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Triggers {
    pub buy: bool,
    pub sell: bool,
}

impl Triggers {
    /// Returns true if no order should be issued
    pub fn is_empty(&self) -> bool {
        !self.buy && !self.sell
    }
}

/// Buy/sell levels per security plus the lot size
///
/// This is the whole mutable configuration of a threshold strategy. The
/// strategy keeps it behind one lock so readers always see the levels and
/// the lot from the same moment.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdBook {
    buy: HashMap<String, f64>,
    sell: HashMap<String, f64>,
    lot: u32,
}

impl ThresholdBook {
    /// Create an empty book with the given lot size
    pub fn new(lot: u32) -> Self {
        Self {
            buy: HashMap::new(),
            sell: HashMap::new(),
            lot,
        }
    }

    /// Build a book from configuration
    pub fn from_config(config: &StrategyConfig) -> Self {
        let mut book = Self::new(config.lot);
        for entry in &config.thresholds {
            if let Some(buy) = entry.buy {
                book.set_buy(&entry.security, buy);
            }
            if let Some(sell) = entry.sell {
                book.set_sell(&entry.security, sell);
            }
        }
        book
    }

    /// Insert or overwrite the buy level for a security
    pub fn set_buy(&mut self, security: &str, threshold: f64) -> Option<f64> {
        self.buy.insert(security.to_string(), threshold)
    }

    /// Insert or overwrite the sell level for a security
    pub fn set_sell(&mut self, security: &str, threshold: f64) -> Option<f64> {
        self.sell.insert(security.to_string(), threshold)
    }

    pub fn buy_threshold(&self, security: &str) -> Option<f64> {
        self.buy.get(security).copied()
    }

    pub fn sell_threshold(&self, security: &str) -> Option<f64> {
        self.sell.get(security).copied()
    }

    /// Remove every buy and sell level; the lot is kept
    pub fn clear(&mut self) {
        self.buy.clear();
        self.sell.clear();
    }

    pub fn lot(&self) -> u32 {
        self.lot
    }

    pub fn set_lot(&mut self, lot: u32) {
        self.lot = lot;
    }

    /// Number of securities with at least one level configured
    pub fn len(&self) -> usize {
        self.buy.len()
            + self
                .sell
                .keys()
                .filter(|security| !self.buy.contains_key(*security))
                .count()
    }

    pub fn is_empty(&self) -> bool {
        self.buy.is_empty() && self.sell.is_empty()
    }

    /// Compare a price against the levels for a security
    ///
    /// Both comparisons are strict: a price equal to a level triggers nothing.
    /// A missing level never triggers.
    pub fn evaluate(&self, security: &str, price: f64) -> Triggers {
        Triggers {
            buy: self
                .buy_threshold(security)
                .is_some_and(|threshold| price < threshold),
            sell: self
                .sell_threshold(security)
                .is_some_and(|threshold| price > threshold),
        }
    }
}

impl Default for ThresholdBook {
    fn default() -> Self {
        Self::new(DEFAULT_LOT)
    }
}
