//! Error types for the jigsaw solver

use thiserror::Error;

/// Error type for parsing input data
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
    /// Other parsing errors
    #[error("Parse error: {0}")]
    Other(String),
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is not implemented
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part number is out of range (exceeds PARTS)
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The placement search exhausted every tile and orientation
    #[error("No arrangement of the tiles fills a {rows}x{cols} layout")]
    NoArrangement { rows: usize, cols: usize },
    /// Assembly was attempted on a layout with empty cells
    #[error("Layout is empty or not completely filled")]
    IncompleteLayout,
    /// A tile is too small to have its border cropped
    #[error("Tile {id} is smaller than 3x3 and cannot be cropped")]
    TileTooSmall { id: u64 },
    /// Cropped tiles do not all share the same dimensions
    #[error("Tile {id} does not match the cropped size of the other tiles")]
    TileSizeMismatch { id: u64 },
    /// The product of the corner tile ids does not fit in 64 bits
    #[error("Product of corner tile ids {ids:?} overflows 64 bits")]
    CornerProductOverflow { ids: [u64; 4] },
}

/// Error type for solver operations
#[derive(Debug, Error)]
pub enum SolverError {
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}
