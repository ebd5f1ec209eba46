//! Trait definitions for the price feed and execution collaborators

use std::sync::Arc;

use super::errors::Result;

/// Receives price updates pushed by a price source
///
/// Implementations must be cheap to call: no blocking I/O on the update path.
pub trait PriceListener: Send + Sync {
    /// Handle a new price for a security
    ///
    /// # Arguments
    /// * `security` - The security identifier
    /// * `price` - The observed market price
    fn price_update(&self, security: &str, price: f64) -> Result<()>;
}

/// Source of price updates that listeners can register with
pub trait PriceSource: Send + Sync {
    /// Register a listener to receive every subsequent update
    fn add_price_listener(&self, listener: Arc<dyn PriceListener>);

    /// Deregister a listener
    ///
    /// Returns true if the listener was registered.
    fn remove_price_listener(&self, listener: &Arc<dyn PriceListener>) -> bool;
}

/// Places orders with a broker
///
/// Both calls are fire-and-forget. Whatever happens to the order after
/// the call returns is the implementation's concern.
pub trait ExecutionService: Send + Sync {
    /// Place a buy order
    ///
    /// # Arguments
    /// * `security` - The security to buy
    /// * `price` - The price that triggered the order
    /// * `volume` - Quantity to buy
    fn buy(&self, security: &str, price: f64, volume: u32);

    /// Place a sell order
    ///
    /// # Arguments
    /// * `security` - The security to sell
    /// * `price` - The price that triggered the order
    /// * `volume` - Quantity to sell
    fn sell(&self, security: &str, price: f64, volume: u32);
}

impl<T: ExecutionService + ?Sized> ExecutionService for Arc<T> {
    fn buy(&self, security: &str, price: f64, volume: u32) {
        (**self).buy(security, price, volume)
    }

    fn sell(&self, security: &str, price: f64, volume: u32) {
        (**self).sell(security, price, volume)
    }
}

/// Shared execution service for dynamic dispatch
pub type SharedExecutionService = Arc<dyn ExecutionService>;
