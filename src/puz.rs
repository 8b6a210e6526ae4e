use crate::error::{ClueExtractorError, Result};
use crate::puzzle::{ClueMaps, Grid, Puzzle, Square};

use log::debug;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

// Across Lite v1.x header layout (little-endian). Checksums are not verified.
const MAGIC: &[u8] = b"ACROSS&DOWN\0";
const MAGIC_OFFSET: usize = 0x02;
const WIDTH_OFFSET: usize = 0x2C;
const HEIGHT_OFFSET: usize = 0x2D;
const NUM_CLUES_OFFSET: usize = 0x2E;
const HEADER_LEN: usize = 0x34;

const BLOCK: u8 = b'.';

/// Reads and parses a `.puz` file.
///
/// # Errors
/// Returns `ReadFile` if the file cannot be read, otherwise whatever
/// [`parse`] reports.
pub fn read_puzzle<P: AsRef<Path>>(path: P) -> Result<Puzzle> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| ClueExtractorError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse(&bytes)
}

/// Parses Across Lite puzzle bytes into a grid and its clue tables.
///
/// Strings are Latin-1. The player fill grid and the checksum fields are
/// skipped; only the solution grid and the clue texts matter here.
pub fn parse(bytes: &[u8]) -> Result<Puzzle> {
    if bytes.len() < HEADER_LEN {
        return Err(ClueExtractorError::NotAPuzzle("shorter than the fixed header"));
    }
    if &bytes[MAGIC_OFFSET..MAGIC_OFFSET + MAGIC.len()] != MAGIC {
        return Err(ClueExtractorError::NotAPuzzle("missing ACROSS&DOWN magic"));
    }

    let width = bytes[WIDTH_OFFSET] as usize;
    let height = bytes[HEIGHT_OFFSET] as usize;
    if width == 0 || height == 0 {
        return Err(ClueExtractorError::MalformedPuzzle(format!(
            "empty grid ({width}x{height})"
        )));
    }
    let num_clues =
        u16::from_le_bytes([bytes[NUM_CLUES_OFFSET], bytes[NUM_CLUES_OFFSET + 1]]) as usize;

    let cells = width * height;
    let solution = bytes
        .get(HEADER_LEN..HEADER_LEN + cells)
        .ok_or_else(|| ClueExtractorError::MalformedPuzzle("truncated solution grid".into()))?;

    // The player fill grid follows the solution grid; skip it.
    let strings_offset = HEADER_LEN + 2 * cells;
    if bytes.len() < strings_offset {
        return Err(ClueExtractorError::MalformedPuzzle("truncated fill grid".into()));
    }

    let mut cursor = StringCursor::new(&bytes[strings_offset..]);
    let _title = cursor.next_string()?;
    let _author = cursor.next_string()?;
    let _copyright = cursor.next_string()?;
    let mut clue_texts = Vec::with_capacity(num_clues);
    for _ in 0..num_clues {
        clue_texts.push(cursor.next_string()?);
    }

    let (grid, clues) = number_grid(width, height, solution, clue_texts)?;
    debug!(
        "parsed {width}x{height} grid, {} across / {} down clues",
        clues.across.len(),
        clues.down.len()
    );
    Ok(Puzzle { grid, clues })
}

/// Assigns clue numbers per the standard convention and pairs the clue texts
/// with them: scanning row-major, a cell starting an across and/or down run
/// of length >= 2 takes the next number, consuming its clue texts from the
/// list in order, across before down.
fn number_grid(
    width: usize,
    height: usize,
    solution: &[u8],
    clue_texts: Vec<String>,
) -> Result<(Grid, ClueMaps)> {
    let blocked = |row: usize, col: usize| solution[row * width + col] == BLOCK;

    let mut squares = Vec::with_capacity(width * height);
    let mut across = HashMap::new();
    let mut down = HashMap::new();
    let mut clue_texts = clue_texts.into_iter();
    let mut number: u16 = 0;

    for row in 0..height {
        for col in 0..width {
            let byte = solution[row * width + col];
            if byte == BLOCK {
                squares.push(None);
                continue;
            }

            let starts_across =
                (col == 0 || blocked(row, col - 1)) && col + 1 < width && !blocked(row, col + 1);
            let starts_down =
                (row == 0 || blocked(row - 1, col)) && row + 1 < height && !blocked(row + 1, col);

            let mut square = Square::new(byte as char);
            if starts_across || starts_down {
                number += 1;
            }
            if starts_across {
                across.insert(number, next_clue(&mut clue_texts, number)?);
                square.across = Some(number);
            }
            if starts_down {
                down.insert(number, next_clue(&mut clue_texts, number)?);
                square.down = Some(number);
            }
            squares.push(Some(square));
        }
    }

    let leftover = clue_texts.count();
    if leftover > 0 {
        return Err(ClueExtractorError::MalformedPuzzle(format!(
            "{leftover} clue(s) not consumed by grid numbering"
        )));
    }

    Ok((Grid::new(width, height, squares), ClueMaps { across, down }))
}

fn next_clue(clue_texts: &mut impl Iterator<Item = String>, number: u16) -> Result<String> {
    clue_texts.next().ok_or_else(|| {
        ClueExtractorError::MalformedPuzzle(format!("clue list exhausted at number {number}"))
    })
}

/// Walks the NUL-terminated Latin-1 strings at the end of the file.
struct StringCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> StringCursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn next_string(&mut self) -> Result<String> {
        let rest = &self.bytes[self.pos..];
        let end = rest.iter().position(|&b| b == 0).ok_or_else(|| {
            ClueExtractorError::MalformedPuzzle("unterminated string section".into())
        })?;
        self.pos += end + 1;
        Ok(rest[..end].iter().map(|&b| b as char).collect())
    }
}

#[cfg(test)]
pub(crate) fn build_puz(width: u8, height: u8, solution: &[u8], clues: &[&str]) -> Vec<u8> {
    assert_eq!(solution.len(), width as usize * height as usize);

    let mut bytes = vec![0u8; HEADER_LEN];
    bytes[MAGIC_OFFSET..MAGIC_OFFSET + MAGIC.len()].copy_from_slice(MAGIC);
    bytes[WIDTH_OFFSET] = width;
    bytes[HEIGHT_OFFSET] = height;
    bytes[NUM_CLUES_OFFSET..NUM_CLUES_OFFSET + 2]
        .copy_from_slice(&(clues.len() as u16).to_le_bytes());

    bytes.extend_from_slice(solution);
    // Player fill grid: blocks stay, open cells are unfilled.
    bytes.extend(
        solution
            .iter()
            .map(|&b| if b == BLOCK { BLOCK } else { b'-' }),
    );
    for s in ["Test puzzle", "Tester", "(c) nobody"] {
        bytes.extend_from_slice(s.as_bytes());
        bytes.push(0);
    }
    for clue in clues {
        bytes.extend_from_slice(clue.as_bytes());
        bytes.push(0);
    }
    bytes.push(0); // notes
    bytes
}
