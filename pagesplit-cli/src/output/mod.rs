//! Report formatting module

use anyhow::Result;
use pagesplit_core::ChunkOutput;
use std::path::PathBuf;

/// Facts about a split run known before any chunk is written
#[derive(Debug, Clone)]
pub struct RunInfo {
    /// Source document
    pub input: PathBuf,
    /// Maximum pages per output
    pub pages_per_chunk: usize,
    /// Pages in the source document
    pub total_pages: usize,
    /// True when nothing is written
    pub dry_run: bool,
}

/// Trait for report formatters
pub trait ReportFormatter {
    /// Called once before the first chunk
    fn begin(&mut self, info: &RunInfo) -> Result<()>;

    /// Report a single chunk (written, or planned in a dry run)
    fn format_chunk(&mut self, output: &ChunkOutput) -> Result<()>;

    /// Finalize output (e.g., print totals)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
