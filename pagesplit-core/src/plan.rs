//! Chunk boundary planning
//!
//! Splits a page index `[0, total_pages)` into contiguous, ascending,
//! non-overlapping ranges of at most `pages_per_chunk` pages each.

use std::num::NonZeroUsize;
use std::ops::Range;

/// A contiguous run of pages that becomes one output document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkDescriptor {
    /// First page (0-based, inclusive)
    pub start: usize,
    /// One past the last page (0-based, exclusive)
    pub end: usize,
    /// Sequence number of this chunk (1-based)
    pub number: usize,
}

impl ChunkDescriptor {
    /// Number of pages in this chunk
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the chunk covers no pages
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// First page as shown to users (1-based)
    pub fn first_page(&self) -> usize {
        self.start + 1
    }

    /// Last page as shown to users (1-based, inclusive)
    pub fn last_page(&self) -> usize {
        self.end
    }

    /// The 0-based page range covered by this chunk
    pub fn pages(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Number of chunks needed for `total_pages` pages
pub fn chunk_count(total_pages: usize, pages_per_chunk: NonZeroUsize) -> usize {
    total_pages.div_ceil(pages_per_chunk.get())
}

/// Computes the chunk boundaries for a document with `total_pages` pages
///
/// An empty document yields an empty plan.
pub fn plan_chunks(total_pages: usize, pages_per_chunk: NonZeroUsize) -> Vec<ChunkDescriptor> {
    let size = pages_per_chunk.get();

    (0..total_pages)
        .step_by(size)
        .map(|start| ChunkDescriptor {
            start,
            end: (start + size).min(total_pages),
            number: start / size + 1,
        })
        .collect()
}
