//! Error types for grid construction, spawning and the terminal front end

use std::fmt;

/// Main error type for all grid operations
#[derive(Debug)]
pub enum GridError {
    /// Construction parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Explicit layout has a row whose length differs from the row count
    NonSquareGrid {
        /// Number of rows in the layout
        rows: usize,
        /// Index of the first offending row
        row: usize,
        /// Length of the offending row
        len: usize,
    },

    /// Number that is not the face value of any tile
    InvalidTileValue {
        /// The rejected value
        value: u32,
    },

    /// Spawn requested on a grid without empty cells
    ///
    /// Callers should only spawn after a move that changed the grid, which
    /// always leaves at least one empty cell behind.
    NoEmptyCells {
        /// Current grid dimensions (rows, cols)
        grid_dimensions: (usize, usize),
    },

    /// Reading commands or writing output failed
    Io {
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::NonSquareGrid { rows, row, len } => {
                write!(
                    f,
                    "Grid is not square: row {row} has {len} cells but there are {rows} rows"
                )
            }
            Self::InvalidTileValue { value } => {
                write!(f, "{value} is not a tile value (expected 0 or a power of two up to 2048)")
            }
            Self::NoEmptyCells { grid_dimensions } => {
                write!(
                    f,
                    "No empty cell to spawn into (grid size {}x{})",
                    grid_dimensions.0, grid_dimensions.1
                )
            }
            Self::Io { operation, source } => {
                write!(f, "I/O error during {operation}: {source}")
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

impl From<std::io::Error> for GridError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            operation: "unknown",
            source: err,
        }
    }
}

/// Attaches the failing operation to I/O errors
pub trait WithOperation<T> {
    /// Name the operation an I/O failure happened in
    ///
    /// # Errors
    ///
    /// Propagates the original error wrapped as [`GridError::Io`]
    fn with_operation(self, operation: &'static str) -> Result<T>;
}

impl<T> WithOperation<T> for std::result::Result<T, std::io::Error> {
    fn with_operation(self, operation: &'static str) -> Result<T> {
        self.map_err(|source| GridError::Io { operation, source })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
