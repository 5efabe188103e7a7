//! Infrastructure layer for candor
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod cerebras;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use cerebras::gateway::CerebrasGateway;
pub use config::{ConfigLoader, FileConfig};
pub use logging::JsonlAttemptLogger;
