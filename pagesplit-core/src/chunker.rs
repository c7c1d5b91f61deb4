//! Splitting a document into numbered chunk files

use crate::{
    config::{OverwritePolicy, SplitConfig},
    document::PagedDocument,
    error::{Result, SplitError},
    naming::output_path,
    plan::{plan_chunks, ChunkDescriptor},
};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// One planned or written output document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkOutput {
    /// Pages covered by this output
    pub chunk: ChunkDescriptor,
    /// Where the output is written
    pub path: PathBuf,
}

/// Splits documents into chunks of at most `pages_per_chunk` pages
#[derive(Debug, Clone, Default)]
pub struct Chunker {
    config: SplitConfig,
}

impl Chunker {
    /// Create a chunker with the given configuration
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Compute every output without writing anything
    pub fn plan<D: PagedDocument + ?Sized>(&self, document: &D) -> Result<Vec<ChunkOutput>> {
        let total_pages = document.page_count();
        if total_pages == 0 {
            return Err(SplitError::EmptyDocument {
                path: document.path().to_path_buf(),
            });
        }

        let source = document.path();
        Ok(plan_chunks(total_pages, self.config.pages_per_chunk)
            .into_iter()
            .map(|chunk| ChunkOutput {
                path: output_path(source, chunk.number),
                chunk,
            })
            .collect())
    }

    /// Write every chunk of `document`, returning the outputs in order
    pub fn split<D: PagedDocument + ?Sized>(&self, document: &D) -> Result<Vec<ChunkOutput>> {
        self.split_with(document, |_| {})
    }

    /// Like [`Chunker::split`], calling `on_chunk` after each file is written
    ///
    /// Chunks are written one at a time. The first failure stops the run and
    /// files written before it are left in place.
    pub fn split_with<D, F>(&self, document: &D, mut on_chunk: F) -> Result<Vec<ChunkOutput>>
    where
        D: PagedDocument + ?Sized,
        F: FnMut(&ChunkOutput),
    {
        let outputs = self.plan(document)?;

        if self.config.overwrite == OverwritePolicy::Refuse {
            if let Some(existing) = outputs.iter().find(|output| output.path.exists()) {
                return Err(SplitError::OutputExists {
                    path: existing.path.clone(),
                });
            }
        }

        for output in &outputs {
            document.write_pages(output.chunk.pages(), &output.path)?;
            on_chunk(output);
        }

        Ok(outputs)
    }
}

/// Split `document` into chunks of `pages_per_chunk` pages next to the source
///
/// Returns the paths of the files written, in chunk order.
pub fn split<D: PagedDocument + ?Sized>(
    document: &D,
    pages_per_chunk: NonZeroUsize,
) -> Result<Vec<PathBuf>> {
    let outputs = Chunker::new(SplitConfig::with_pages_per_chunk(pages_per_chunk)).split(document)?;
    Ok(outputs.into_iter().map(|output| output.path).collect())
}
