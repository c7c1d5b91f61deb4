//! Input handling module

pub mod validate;

pub use validate::{has_expected_extension, validate_input};
