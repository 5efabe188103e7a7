//! Application layer for candor
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ExecutionParams, SamplingParams};
pub use ports::{
    attempt_logger::{AttemptEvent, AttemptLogger, NoAttemptLogger},
    llm_gateway::{GatewayError, LlmGateway},
    progress::{ChatProgressNotifier, NoProgress},
    response_judge::ResponseJudge,
};
pub use use_cases::run_chat::{
    LlmResponseJudge, ResponseWriter, RunChatError, RunChatInput, RunChatUseCase,
};
