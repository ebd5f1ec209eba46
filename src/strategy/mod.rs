//! Threshold strategy: turns price updates into broker orders
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  price_update   ┌────────────────────┐  buy / sell  ┌──────────────────┐
//! │  PriceSource │ ──────────────▶ │ ThresholdStrategy  │ ───────────▶ │ ExecutionService │
//! └──────────────┘                 │   RwLock<Book>     │              └──────────────────┘
//!                                  └────────────────────┘
//!                                           ▲
//!                                           │ set_*_threshold / clear_thresholds / set_lot
//!                                    trader / config
//! ```
//!
//! # Components
//!
//! - [`ThresholdStrategy`]: evaluates each update and calls the broker
//! - [`ThresholdBook`]: per-security buy/sell levels and the lot size
//! - [`Triggers`]: which sides a single update fired

mod book;
mod threshold;

pub use book::{ThresholdBook, Triggers};
pub use threshold::ThresholdStrategy;
