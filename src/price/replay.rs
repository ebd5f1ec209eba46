//! Line-oriented price input
//!
//! Each line holds `<SECURITY> <PRICE>` separated by whitespace. Blank lines
//! and lines starting with `#` are ignored.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::common::errors::{Result, TraderError};
use crate::common::types::PriceUpdate;

/// Parse one input line
///
/// Returns `Ok(None)` for blank and comment lines.
pub fn parse_line(line: &str) -> Result<Option<PriceUpdate>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let mut parts = trimmed.split_whitespace();
    let (security, raw_price) = match (parts.next(), parts.next(), parts.next()) {
        (Some(security), Some(price), None) => (security, price),
        _ => {
            return Err(TraderError::PriceParse {
                line: line.to_string(),
                reason: "expected <SECURITY> <PRICE>".to_string(),
            })
        }
    };

    let price: f64 = raw_price.parse().map_err(|e: std::num::ParseFloatError| {
        TraderError::PriceParse {
            line: line.to_string(),
            reason: e.to_string(),
        }
    })?;

    Ok(Some(PriceUpdate::new(security, price)))
}

/// Read price lines until EOF and forward them on the channel
///
/// Malformed lines are logged and skipped. Returns the number of updates sent.
pub async fn pump_lines<R>(reader: R, sender: mpsc::Sender<PriceUpdate>) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut sent = 0;

    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Ok(Some(update)) => {
                sender.send(update).await?;
                sent += 1;
            }
            Ok(None) => {}
            Err(e) => warn!("Skipping price line: {}", e),
        }
    }

    debug!(sent, "Price input exhausted");
    Ok(sent)
}
