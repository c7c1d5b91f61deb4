//! Split command implementation

use crate::error::CliError;
use crate::input::validate_input;
use crate::output::{JsonFormatter, ReportFormatter, RunInfo, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::Parser;
use pagesplit_core::{
    Chunker, OverwritePolicy, PagedDocument, PdfDocument, SplitConfig, DEFAULT_PAGES_PER_CHUNK,
};
use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Split a PDF into fixed-size page chunks
#[derive(Debug, Parser)]
#[command(name = "pagesplit", version, long_about = None)]
pub struct SplitArgs {
    /// Path to the PDF file to split
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Number of pages per chunk
    #[arg(short = 'n', long = "pages", value_name = "N", default_value_t = DEFAULT_PAGES_PER_CHUNK.get())]
    pub pages: usize,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Show the chunks that would be written without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Fail instead of overwriting existing output files
    #[arg(long)]
    pub no_clobber: bool,

    /// Only print the final count
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// One line per created file followed by a total
    Text,
    /// A single JSON object describing every output
    Json,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        let stdout = io::stdout();
        self.execute_to(stdout.lock())
    }

    /// Execute the split command, writing the report to `writer`
    pub fn execute_to<W: Write>(&self, writer: W) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting split");
        log::debug!("Arguments: {:?}", self);

        let config = self.split_config()?;
        validate_input(&self.input)?;

        let document = PdfDocument::open(&self.input)?;
        log::info!(
            "Loaded {} ({} pages, PDF {})",
            self.input.display(),
            document.page_count(),
            document.version()
        );

        let chunker = Chunker::new(config);
        let plan = chunker.plan(&document)?;
        log::debug!("Planned {} chunk(s)", plan.len());

        let mut formatter = self.formatter(writer);
        formatter.begin(&RunInfo {
            input: self.input.clone(),
            pages_per_chunk: chunker.config().pages_per_chunk.get(),
            total_pages: document.page_count(),
            dry_run: self.dry_run,
        })?;

        if self.dry_run {
            for output in &plan {
                formatter.format_chunk(output)?;
            }
            return formatter.finish();
        }

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_chunks(plan.len() as u64);

        let mut report_error = None;
        let result = chunker.split_with(&document, |output| {
            log::debug!(
                "Wrote chunk {} to {}",
                output.chunk.number,
                output.path.display()
            );
            if report_error.is_none() {
                report_error = progress.suspend(|| formatter.format_chunk(output)).err();
            }
            progress.chunk_completed(&output.path.display().to_string());
        });
        progress.finish();

        let outputs = result?;
        if let Some(err) = report_error {
            return Err(err);
        }

        log::info!("Created {} file(s)", outputs.len());
        formatter.finish()
    }

    /// Build the split configuration from the arguments
    pub fn split_config(&self) -> Result<SplitConfig, CliError> {
        let pages = NonZeroUsize::new(self.pages).ok_or_else(|| {
            CliError::InvalidArgument("Pages per chunk must be greater than 0".to_string())
        })?;

        let overwrite = if self.no_clobber {
            OverwritePolicy::Refuse
        } else {
            OverwritePolicy::Overwrite
        };

        Ok(SplitConfig::with_pages_per_chunk(pages).overwrite(overwrite))
    }

    fn formatter<'w, W: Write + 'w>(&self, writer: W) -> Box<dyn ReportFormatter + 'w> {
        match self.format {
            ReportFormat::Text => Box::new(TextFormatter::new(writer, self.quiet)),
            ReportFormat::Json => Box::new(JsonFormatter::new(writer)),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init()?;
        }

        Ok(())
    }
}
