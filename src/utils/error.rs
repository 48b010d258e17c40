//! Error handling for table model operations
//!
//! This module provides a unified error type and result type for every
//! geometry, grid and table operation. All failures are precondition
//! violations: operations validate before mutating, so an `Err` always
//! leaves the model untouched.

use thiserror::Error;

use crate::core::geometry::{Coord, Rect};

/// Table model error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Insertion target coordinate is already a key of the grid
    #[error("Duplicate coordinate: a cell is already stored at {coord}")]
    DuplicateCoordinate { coord: Coord },

    /// A new, merged or expanded cell would intersect another cell
    #[error("Overlap: the cell at {coord} intersects the cell at {conflict}")]
    Overlap { coord: Coord, conflict: Coord },

    /// Deletion or lookup of a coordinate with no cell
    #[error("Missing coordinate: no cell is stored at {coord}")]
    MissingCoordinate { coord: Coord },

    /// Merge/expand region is not covered exactly by existing cells
    #[error("Invalid merge region {region}: {reason}")]
    InvalidMergeRegion { region: Rect, reason: &'static str },

    /// Intersection requested on disjoint rects
    #[error("No intersection between {first} and {second}")]
    NoIntersection { first: Rect, second: Rect },

    /// A value was used where a point-like value is required
    #[error("Incompatible operand for {operation}: {operand}")]
    IncompatibleOperand {
        operation: &'static str,
        operand: String,
    },

    /// Coordinates are 1-indexed and bounded by `u32::MAX`
    #[error("Invalid coordinate ({x}, {y}): grid coordinates are 1-indexed")]
    InvalidCoordinate { x: i64, y: i64 },

    /// Rect corners out of order
    #[error("Invalid rect: max corner {max} is before min corner {min}")]
    InvalidRect { min: Coord, max: Coord },

    /// Cell spans must be at least 1×1
    #[error("Invalid span ({width} x {height}): width and height must be at least 1")]
    InvalidSpan { width: i64, height: i64 },

    /// Text is not an Excel-style reference (`E3`, `A2:B3`)
    #[error("Invalid reference: '{reference}'")]
    InvalidReference { reference: String },
}

/// Result type for table model operations
pub type TableResult<T> = Result<T, TableError>;

// Convenience constructors for errors
impl TableError {
    pub fn invalid_merge(region: Rect, reason: &'static str) -> Self {
        TableError::InvalidMergeRegion { region, reason }
    }

    pub fn incompatible(operation: &'static str, operand: impl ToString) -> Self {
        TableError::IncompatibleOperand {
            operation,
            operand: operand.to_string(),
        }
    }

    pub fn invalid_reference(reference: impl Into<String>) -> Self {
        TableError::InvalidReference {
            reference: reference.into(),
        }
    }

    /// Coordinate of the cell the error is about, when there is one
    pub fn coord(&self) -> Option<Coord> {
        match self {
            TableError::DuplicateCoordinate { coord }
            | TableError::Overlap { coord, .. }
            | TableError::MissingCoordinate { coord } => Some(*coord),
            _ => None,
        }
    }
}
