//! MyTrader Library
//!
//! Watches streaming security prices and places buy/sell orders when a
//! price crosses the levels configured for that security.

pub mod common;
pub mod config;
pub mod execution;
pub mod price;
pub mod strategy;

// Re-export commonly used types
pub use common::errors::{Result, TraderError};
pub use common::traits::{ExecutionService, PriceListener, PriceSource, SharedExecutionService};
pub use common::types::{OrderRecord, PriceUpdate, Side};
pub use config::types::{AppConfig, StrategyConfig, ThresholdConfig, DEFAULT_LOT};
pub use execution::{LoggingExecutionService, RecordingExecutionService};
pub use price::PriceFeed;
pub use strategy::{ThresholdBook, ThresholdStrategy, Triggers};
