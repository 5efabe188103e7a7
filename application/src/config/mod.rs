//! Application-level configuration.
//!
//! This module provides configuration types that control how the chat loop
//! behaves:
//!
//! - [`ExecutionParams`] — attempt budget and transport failure threshold
//! - [`SamplingParams`] — per-role sampling settings for gateway calls

pub mod execution_params;

pub use execution_params::{ExecutionParams, SamplingParams};
