//! Application configuration: TOML file layered under `APP_` environment variables

pub mod loader;
pub mod types;

pub use loader::{load_config, load_from_str};
pub use types::{AppConfig, AppSettings, StrategyConfig, ThresholdConfig, DEFAULT_LOT};
