//! Fixed-size page chunking for PDF documents
//!
//! This crate partitions a multi-page document into sequentially numbered
//! smaller documents, each holding at most a fixed number of pages. Chunks
//! are written next to the source as `<stem>_part<N>.<ext>`.
//!
//! # Example
//!
//! ```no_run
//! use pagesplit_core::{Chunker, PdfDocument, SplitConfig};
//! use std::num::NonZeroUsize;
//!
//! let document = PdfDocument::open("manual.pdf")?;
//! let chunker = Chunker::new(SplitConfig::with_pages_per_chunk(NonZeroUsize::new(10).unwrap()));
//!
//! for output in chunker.split(&document)? {
//!     println!(
//!         "{} (pages {}-{})",
//!         output.path.display(),
//!         output.chunk.first_page(),
//!         output.chunk.last_page()
//!     );
//! }
//! # Ok::<(), pagesplit_core::SplitError>(())
//! ```

#![warn(missing_docs)]

pub mod chunker;
pub mod config;
pub mod document;
pub mod error;
pub mod naming;
pub mod plan;

pub use chunker::{split, ChunkOutput, Chunker};
pub use config::{OverwritePolicy, SplitConfig, DEFAULT_PAGES_PER_CHUNK};
pub use document::{PagedDocument, PdfDocument};
pub use error::{Result, SplitError};
pub use naming::output_path;
pub use plan::{chunk_count, plan_chunks, ChunkDescriptor};

/// File extension accepted for input documents (compared case-insensitively)
pub const EXPECTED_EXTENSION: &str = "pdf";
