use crate::config::Config;
use crate::error::Result;
use crate::export::write_clues;
use crate::extract::extract_clues;
use crate::paths::{OutputRule, clue_output_path};
use crate::puz::read_puzzle;
use log::debug;
use std::path::{Path, PathBuf};

const PUZZLE_EXTENSION: &str = "puz";

/// Result of processing one puzzle file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub output: PathBuf,
    pub clue_count: usize,
}

/// Expands the CLI inputs into the list of puzzle files to process.
///
/// A single input that is a directory stands for every `.puz` file directly
/// inside it, in sorted order; anything else is taken as a list of puzzle
/// file paths.
pub fn gather_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    if let [dir] = inputs
        && dir.is_dir()
    {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) == Some(PUZZLE_EXTENSION) {
                files.push(path);
            }
        }
        files.sort();
        return Ok(files);
    }
    Ok(inputs.to_vec())
}

/// Runs the full pipeline for one puzzle file: parse, extract, derive the
/// output path, write the TSV file.
pub fn process_file(input: &Path, rule: OutputRule, config: &Config) -> Result<FileSummary> {
    let puzzle = read_puzzle(input)?;
    let records = extract_clues(&puzzle.grid, &puzzle.clues)?;
    let output = clue_output_path(input, rule, &config.clues_dir)?;
    debug!("{}: {} clue records", input.display(), records.len());
    write_clues(&records, &output)?;

    Ok(FileSummary {
        output,
        clue_count: records.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClueExtractorError;
    use crate::puz::build_puz;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_gather_inputs_directory_filters_puz_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("puzzle1.puz"), b"x").unwrap();
        fs::write(temp_dir.path().join("readme.txt"), b"x").unwrap();
        fs::create_dir(temp_dir.path().join("nested.puz")).unwrap();

        let inputs = vec![temp_dir.path().to_path_buf()];
        let files = gather_inputs(&inputs).unwrap();

        assert_eq!(files, vec![temp_dir.path().join("puzzle1.puz")]);
    }

    #[test]
    fn test_gather_inputs_directory_is_sorted() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.puz"), b"x").unwrap();
        fs::write(temp_dir.path().join("a.puz"), b"x").unwrap();
        fs::write(temp_dir.path().join("c.puz"), b"x").unwrap();

        let inputs = vec![temp_dir.path().to_path_buf()];
        let files = gather_inputs(&inputs).unwrap();

        assert_eq!(
            files,
            vec![
                temp_dir.path().join("a.puz"),
                temp_dir.path().join("b.puz"),
                temp_dir.path().join("c.puz"),
            ]
        );
    }

    #[test]
    fn test_gather_inputs_file_list_passes_through() {
        let inputs = vec![PathBuf::from("one.puz"), PathBuf::from("two.puz")];
        let files = gather_inputs(&inputs).unwrap();
        assert_eq!(files, inputs);
    }

    #[test]
    fn test_gather_inputs_single_file_is_not_directory_mode() {
        let inputs = vec![PathBuf::from("lone.puz")];
        let files = gather_inputs(&inputs).unwrap();
        assert_eq!(files, inputs);
    }

    #[test]
    fn test_process_file_replace_rule() {
        let temp_dir = TempDir::new().unwrap();
        let puzzles_dir = temp_dir.path().join("data").join("puzzles");
        fs::create_dir_all(&puzzles_dir).unwrap();
        let input = puzzles_dir.join("mini.puz");
        fs::write(&input, build_puz(3, 1, b"ABC", &["Test clue"])).unwrap();

        let summary =
            process_file(&input, OutputRule::ReplaceComponent, &Config::default()).unwrap();

        let expected = temp_dir
            .path()
            .join("data")
            .join("clues")
            .join("mini.puz.txt");
        assert_eq!(summary.output, expected);
        assert_eq!(summary.clue_count, 1);
        assert_eq!(fs::read_to_string(&expected).unwrap(), "ABC\tTest clue\n");
    }

    #[test]
    fn test_process_file_sibling_rule() {
        let temp_dir = TempDir::new().unwrap();
        let week_dir = temp_dir.path().join("week1");
        fs::create_dir_all(&week_dir).unwrap();
        let input = week_dir.join("mini.puz");
        fs::write(&input, build_puz(3, 1, b"ABC", &["Test clue"])).unwrap();

        let summary = process_file(&input, OutputRule::SiblingDir, &Config::default()).unwrap();

        let expected = temp_dir.path().join("clues").join("mini.puz.txt");
        assert_eq!(summary.output, expected);
        assert!(expected.exists());
    }

    #[test]
    fn test_process_file_unreadable_input() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("puzzles").join("gone.puz");

        let err = process_file(&missing, OutputRule::ReplaceComponent, &Config::default())
            .unwrap_err();
        assert!(matches!(err, ClueExtractorError::ReadFile { .. }));
    }
}
