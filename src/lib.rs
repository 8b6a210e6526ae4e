pub mod batch;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod paths;
pub mod puz;
pub mod puzzle;

pub use batch::{FileSummary, gather_inputs, process_file};
pub use config::Config;
pub use error::ClueExtractorError;
pub use extract::{ClueRecord, extract_clues, word_across, word_down};
pub use paths::{OutputRule, clue_output_path};
pub use puz::{parse, read_puzzle};
pub use puzzle::{ClueMaps, Direction, Grid, Puzzle, Square};
