//! Shared types passed between price feeds, the strategy and execution services

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order side (buy or sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// A single observed price for a security
#[derive(Debug, Clone, PartialEq)]
pub struct PriceUpdate {
    /// Security identifier (ticker symbol)
    pub security: String,
    /// Observed market price
    pub price: f64,
    /// When the update was received
    pub received_at: DateTime<Utc>,
}

impl PriceUpdate {
    /// Create a price update stamped with the current time
    pub fn new(security: impl Into<String>, price: f64) -> Self {
        Self {
            security: security.into(),
            price,
            received_at: Utc::now(),
        }
    }
}

/// An order handed to an execution service
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub side: Side,
    pub security: String,
    pub price: f64,
    pub volume: u32,
    pub issued_at: DateTime<Utc>,
}

impl OrderRecord {
    pub fn new(side: Side, security: impl Into<String>, price: f64, volume: u32) -> Self {
        Self {
            side,
            security: security.into(),
            price,
            volume,
            issued_at: Utc::now(),
        }
    }

    /// Notional value of the order (price * volume)
    pub fn notional(&self) -> f64 {
        self.price * f64::from(self.volume)
    }
}
