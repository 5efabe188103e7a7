//! Review domain: sycophancy verdicts and structured-output recovery

pub mod parsing;
pub mod verdict;
