//! pagesplit CLI library
//!
//! This library provides the command-line interface for splitting PDF
//! documents into fixed-size page chunks.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
