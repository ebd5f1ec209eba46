//! Execution services that receive orders from the strategy

pub mod logging;
pub mod recording;

pub use logging::LoggingExecutionService;
pub use recording::RecordingExecutionService;
