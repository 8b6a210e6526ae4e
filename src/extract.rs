use crate::error::{ClueExtractorError, Result};
use crate::puzzle::{ClueMaps, Direction, Grid};

/// One extracted (answer word, clue text) pair, in grid scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueRecord {
    pub word: String,
    pub clue: String,
}

/// Assembles the across answer starting at (row, col).
///
/// Walks rightward appending each answer character until the next cell is
/// blocked or past the right edge. `Grid::square` bounds-checks both axes,
/// so the scan can never read outside the grid.
pub fn word_across(grid: &Grid, row: usize, mut col: usize) -> String {
    let mut word = String::new();
    while let Some(square) = grid.square(row, col) {
        word.push(square.answer);
        col += 1;
    }
    word
}

/// Assembles the down answer starting at (row, col), walking downward.
pub fn word_down(grid: &Grid, mut row: usize, col: usize) -> String {
    let mut word = String::new();
    while let Some(square) = grid.square(row, col) {
        word.push(square.answer);
        row += 1;
    }
    word
}

/// Scans every cell in row-major order and emits a [`ClueRecord`] for each
/// across and down word start.
///
/// # Errors
/// Returns [`ClueExtractorError::MissingClue`] when a square carries a clue
/// number with no entry in `clues`; the parser produced inconsistent output
/// and an empty clue would hide that.
pub fn extract_clues(grid: &Grid, clues: &ClueMaps) -> Result<Vec<ClueRecord>> {
    let mut records = Vec::new();

    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let Some(square) = grid.square(row, col) else {
                continue;
            };
            if let Some(number) = square.across {
                records.push(ClueRecord {
                    word: word_across(grid, row, col),
                    clue: lookup_clue(clues, Direction::Across, number)?,
                });
            }
            if let Some(number) = square.down {
                records.push(ClueRecord {
                    word: word_down(grid, row, col),
                    clue: lookup_clue(clues, Direction::Down, number)?,
                });
            }
        }
    }

    Ok(records)
}

fn lookup_clue(clues: &ClueMaps, direction: Direction, number: u16) -> Result<String> {
    clues
        .lookup(direction, number)
        .map(str::to_owned)
        .ok_or(ClueExtractorError::MissingClue { direction, number })
}
