//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Column letter conversion for Excel-style references
//! - Error types and result types

pub mod alphabet;
pub mod error;

// Re-export commonly used items
pub use alphabet::{alphabet_to_int, int_to_alphabet};
pub use error::{TableError, TableResult};
