//! JSON report formatter

use super::{ReportFormatter, RunInfo};
use anyhow::Result;
use pagesplit_core::ChunkOutput;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - emits one report object when finished
pub struct JsonFormatter<W: Write> {
    writer: W,
    report: SplitReport,
}

/// Data structure for JSON output
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SplitReport {
    /// Source document
    pub input: String,
    /// Maximum pages per output
    pub pages_per_chunk: usize,
    /// Pages in the source document
    pub total_pages: usize,
    /// True when no files were written
    pub dry_run: bool,
    /// Outputs in chunk order
    pub outputs: Vec<ChunkData>,
}

/// One output file in the JSON report
#[derive(Debug, Serialize, Deserialize)]
pub struct ChunkData {
    /// Output file path
    pub path: String,
    /// Chunk number (1-based)
    pub chunk: usize,
    /// First page (1-based)
    pub first_page: usize,
    /// Last page (1-based, inclusive)
    pub last_page: usize,
    /// Number of pages
    pub page_count: usize,
}

impl From<&ChunkOutput> for ChunkData {
    fn from(output: &ChunkOutput) -> Self {
        Self {
            path: output.path.display().to_string(),
            chunk: output.chunk.number,
            first_page: output.chunk.first_page(),
            last_page: output.chunk.last_page(),
            page_count: output.chunk.len(),
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            report: SplitReport::default(),
        }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportFormatter for JsonFormatter<W> {
    fn begin(&mut self, info: &RunInfo) -> Result<()> {
        self.report = SplitReport {
            input: info.input.display().to_string(),
            pages_per_chunk: info.pages_per_chunk,
            total_pages: info.total_pages,
            dry_run: info.dry_run,
            outputs: Vec::new(),
        };
        Ok(())
    }

    fn format_chunk(&mut self, output: &ChunkOutput) -> Result<()> {
        self.report.outputs.push(output.into());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.report)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
