//! Configuration loading

pub mod file_config;
pub mod loader;

pub use file_config::{
    FileBackendConfig, FileBehaviorConfig, FileCheckerConfig, FileConfig, FileLogConfig,
    FileModelsConfig, FileWriterConfig,
};
pub use loader::ConfigLoader;
