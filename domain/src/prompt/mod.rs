//! Prompt templates for the writer/checker flow

pub mod checker;
pub mod writer;

pub use checker::CheckerPrompt;
pub use writer::WriterPrompt;
