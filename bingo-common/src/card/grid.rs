//! Grid layout

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use super::{CardPhrases, CENTER, FREE_CELL, GRID_SIZE};

/// 5×5 bingo card, serialized as an array of rows
///
/// Only [`build_grid`] constructs one, so every grid has the `FREE` center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BingoGrid(Vec<Vec<String>>);

impl BingoGrid {
    pub fn rows(&self) -> &[Vec<String>] {
        &self.0
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.0.get(row)?.get(col).map(String::as_str)
    }

    /// Every cell except the center, in row-major order
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.0.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(move |(col, _)| (row, *col) != (CENTER, CENTER))
                .map(|(_, cell)| cell.as_str())
        })
    }
}

/// Shuffle 24 phrases and place them row-major around the `FREE` center
pub fn build_grid<R: Rng + ?Sized>(phrases: CardPhrases, rng: &mut R) -> BingoGrid {
    let mut shuffled = phrases.into_inner();
    // Fisher-Yates
    shuffled.shuffle(rng);

    let mut cursor = shuffled.into_iter();
    let mut rows = Vec::with_capacity(GRID_SIZE);
    for row in 0..GRID_SIZE {
        let mut cells = Vec::with_capacity(GRID_SIZE);
        for col in 0..GRID_SIZE {
            if row == CENTER && col == CENTER {
                cells.push(FREE_CELL.to_string());
            } else {
                // CardPhrases always holds exactly one phrase per non-center cell
                cells.push(cursor.next().unwrap_or_default());
            }
        }
        rows.push(cells);
    }

    BingoGrid(rows)
}
