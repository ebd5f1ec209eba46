//! Channel type definitions for inter-task communication

use tokio::sync::mpsc;

use super::types::PriceUpdate;

/// Default channel buffer size
pub const DEFAULT_CHANNEL_SIZE: usize = 1000;

/// Create a new price update channel with the default buffer size
pub fn create_price_channel() -> (mpsc::Sender<PriceUpdate>, mpsc::Receiver<PriceUpdate>) {
    mpsc::channel(DEFAULT_CHANNEL_SIZE)
}

/// Create a new price update channel with a custom buffer size
///
/// A size of zero is bumped to one since tokio rejects empty buffers.
pub fn create_price_channel_with_size(
    size: usize,
) -> (mpsc::Sender<PriceUpdate>, mpsc::Receiver<PriceUpdate>) {
    mpsc::channel(size.max(1))
}
