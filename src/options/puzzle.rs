use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TurnError;
use crate::puzzle::PuzzleSize;

/// Puzzle selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Puzzle", inline)]
#[serde(default)]
pub struct PuzzleOptions {
    /// Layers per edge.
    #[schemars(title = "Size", range(min = 2, max = 5))]
    pub size: u8,
}

impl Default for PuzzleOptions {
    fn default() -> Self {
        Self { size: 3 }
    }
}

impl PuzzleOptions {
    /// Validated puzzle size.
    ///
    /// # Errors
    ///
    /// [`TurnError::InvalidPuzzleSize`] outside 2 to 5.
    pub fn puzzle_size(&self) -> Result<PuzzleSize, TurnError> {
        PuzzleSize::new(self.size)
    }
}
