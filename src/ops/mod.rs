//! High-level operations
//!
//! These functions implement the core logic for CLI commands.

pub mod generate;

pub use generate::{
    generate, generate_all, run_formatter, run_job, FormatStatus, GenerateOptions,
    GenerateResult, JobReport,
};
