//! Configuration types for splitting

use std::num::NonZeroUsize;

/// Pages per chunk used when none is given
pub const DEFAULT_PAGES_PER_CHUNK: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(n) => n,
    None => unreachable!(),
};

/// What to do when an output file already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwritePolicy {
    /// Replace existing files silently
    #[default]
    Overwrite,
    /// Fail before writing anything if any output file exists
    Refuse,
}

/// Split configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    /// Maximum number of pages in each output document
    pub pages_per_chunk: NonZeroUsize,
    /// Handling of pre-existing output files
    pub overwrite: OverwritePolicy,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            pages_per_chunk: DEFAULT_PAGES_PER_CHUNK,
            overwrite: OverwritePolicy::default(),
        }
    }
}

impl SplitConfig {
    /// Create a configuration with the given chunk size
    pub fn with_pages_per_chunk(pages_per_chunk: NonZeroUsize) -> Self {
        Self {
            pages_per_chunk,
            ..Self::default()
        }
    }

    /// Set the overwrite policy
    pub fn overwrite(mut self, policy: OverwritePolicy) -> Self {
        self.overwrite = policy;
        self
    }
}
