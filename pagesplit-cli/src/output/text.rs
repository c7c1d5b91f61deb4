//! Plain text report formatter

use super::{ReportFormatter, RunInfo};
use anyhow::Result;
use pagesplit_core::ChunkOutput;
use std::io::Write;

/// Plain text formatter - one line per output file and a final count
pub struct TextFormatter<W: Write> {
    writer: W,
    quiet: bool,
    dry_run: bool,
    count: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    ///
    /// In quiet mode only the final count is printed.
    pub fn new(writer: W, quiet: bool) -> Self {
        Self {
            writer,
            quiet,
            dry_run: false,
            count: 0,
        }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportFormatter for TextFormatter<W> {
    fn begin(&mut self, info: &RunInfo) -> Result<()> {
        self.dry_run = info.dry_run;
        if !self.quiet {
            writeln!(
                self.writer,
                "Splitting {} into {}-page chunks...",
                info.input.display(),
                info.pages_per_chunk
            )?;
        }
        Ok(())
    }

    fn format_chunk(&mut self, output: &ChunkOutput) -> Result<()> {
        self.count += 1;
        if !self.quiet {
            let verb = if self.dry_run { "Would create" } else { "Created" };
            writeln!(
                self.writer,
                "{verb}: {} (pages {}-{})",
                output.path.display(),
                output.chunk.first_page(),
                output.chunk.last_page()
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        if self.dry_run {
            writeln!(self.writer, "Dry run: would create {} file(s)", self.count)?;
        } else {
            writeln!(self.writer, "Done! Created {} file(s)", self.count)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
