//! Price sources that push updates to listeners

pub mod feed;
pub mod replay;

pub use feed::PriceFeed;
pub use replay::{parse_line, pump_lines};
