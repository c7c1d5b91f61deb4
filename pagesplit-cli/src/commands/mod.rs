//! CLI command implementations

pub mod split;

pub use split::{ReportFormat, SplitArgs};
