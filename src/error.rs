use crate::puzzle::Direction;
use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClueExtractorError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Failed to read puzzle file {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Not a puzzle file: {0}")]
    NotAPuzzle(&'static str),

    #[error("Malformed puzzle file: {0}")]
    MalformedPuzzle(String),

    #[error("No {direction} clue numbered {number}")]
    MissingClue { direction: Direction, number: u16 },

    #[error("Cannot derive output path for {path}: {reason}")]
    OutputPath { path: PathBuf, reason: &'static str },

    #[error("Failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create file {path}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ClueExtractorError>;
