//! Grid geometry: mapping between `(row, col)` and linear move indices.
//!
//! The mapping is `index = row * width + col`. Both the win detector's
//! ray directions and the feature tensor's axis order depend on it.

use super::action::MoveError;
use super::Location;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Dimensions of a rectangular grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Geometry {
    width: usize,
    height: usize,
}

impl Geometry {
    /// Creates a geometry. Dimensions are validated by the board constructor.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Whether `index` names a cell of this grid.
    pub fn contains(&self, index: usize) -> bool {
        index < self.cell_count()
    }

    /// Converts a move index to its location.
    ///
    /// Total for in-range input; out-of-range indices map to rows past the bottom edge.
    #[instrument]
    pub fn move_to_location(&self, index: usize) -> Location {
        Location::new(index / self.width, index % self.width)
    }

    /// Converts a location to its move index.
    #[instrument]
    pub fn location_to_move(&self, location: Location) -> Result<usize, MoveError> {
        let Location { row, col } = location;
        if row >= self.height || col >= self.width {
            return Err(MoveError::InvalidLocation { row, col });
        }
        Ok(row * self.width + col)
    }

    /// Iterates every move index in ascending order.
    pub fn moves(&self) -> std::ops::Range<usize> {
        0..self.cell_count()
    }
}
