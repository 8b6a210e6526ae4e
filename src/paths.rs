use crate::error::{ClueExtractorError, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Component name the `ReplaceComponent` rule looks for.
const PUZZLES_COMPONENT: &str = "puzzles";

/// How the output path is derived from the input path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputRule {
    /// Replace the last directory component named `puzzles` with the clues
    /// directory.
    ReplaceComponent,
    /// Drop the input's parent directory name and use the clues directory
    /// beside it.
    SiblingDir,
}

/// Derives the output path for a puzzle file: the input filename with `.txt`
/// appended, placed according to `rule`.
///
/// # Errors
/// `ReplaceComponent` fails when no directory component of the input is
/// named `puzzles`; both rules fail for an input with no filename.
pub fn clue_output_path(input: &Path, rule: OutputRule, clues_dir: &str) -> Result<PathBuf> {
    let file_name = input.file_name().ok_or(ClueExtractorError::OutputPath {
        path: input.to_path_buf(),
        reason: "input has no filename",
    })?;
    let mut out_name = file_name.to_os_string();
    out_name.push(".txt");

    match rule {
        OutputRule::ReplaceComponent => {
            let parts: Vec<&OsStr> = input.iter().collect();
            let dir_parts = &parts[..parts.len() - 1];
            let idx = dir_parts
                .iter()
                .rposition(|&p| p == OsStr::new(PUZZLES_COMPONENT))
                .ok_or(ClueExtractorError::OutputPath {
                    path: input.to_path_buf(),
                    reason: "no directory component named `puzzles`",
                })?;

            let mut out = PathBuf::new();
            for (i, part) in dir_parts.iter().enumerate() {
                if i == idx {
                    out.push(clues_dir);
                } else {
                    out.push(part);
                }
            }
            out.push(out_name);
            Ok(out)
        }
        OutputRule::SiblingDir => {
            let dir = input.parent().unwrap_or(Path::new(""));
            let grandparent = dir.parent().unwrap_or(Path::new(""));
            Ok(grandparent.join(clues_dir).join(out_name))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_component() {
        let out =
            clue_output_path(Path::new("data/puzzles/mon.puz"), OutputRule::ReplaceComponent, "clues")
                .unwrap();
        assert_eq!(out, PathBuf::from("data/clues/mon.puz.txt"));
    }

    #[test]
    fn test_replace_component_deeper_layout() {
        let out =
            clue_output_path(Path::new("puzzles/2024/mon.puz"), OutputRule::ReplaceComponent, "clues")
                .unwrap();
        assert_eq!(out, PathBuf::from("clues/2024/mon.puz.txt"));
    }

    #[test]
    fn test_replace_component_uses_last_occurrence() {
        let out = clue_output_path(
            Path::new("puzzles/puzzles/mon.puz"),
            OutputRule::ReplaceComponent,
            "clues",
        )
        .unwrap();
        assert_eq!(out, PathBuf::from("puzzles/clues/mon.puz.txt"));
    }

    #[test]
    fn test_replace_component_requires_puzzles_dir() {
        let err = clue_output_path(
            Path::new("data/week1/mon.puz"),
            OutputRule::ReplaceComponent,
            "clues",
        )
        .unwrap_err();
        assert!(matches!(err, ClueExtractorError::OutputPath { .. }));
    }

    #[test]
    fn test_replace_component_ignores_filename() {
        // The filename itself is never the replaced component.
        let err = clue_output_path(Path::new("data/puzzles"), OutputRule::ReplaceComponent, "clues")
            .unwrap_err();
        assert!(matches!(err, ClueExtractorError::OutputPath { .. }));
    }

    #[test]
    fn test_sibling_dir() {
        let out = clue_output_path(Path::new("data/week1/mon.puz"), OutputRule::SiblingDir, "clues")
            .unwrap();
        assert_eq!(out, PathBuf::from("data/clues/mon.puz.txt"));
    }

    #[test]
    fn test_sibling_dir_bare_filename() {
        let out = clue_output_path(Path::new("mon.puz"), OutputRule::SiblingDir, "clues").unwrap();
        assert_eq!(out, PathBuf::from("clues/mon.puz.txt"));
    }

    #[test]
    fn test_custom_clues_dir_name() {
        let out =
            clue_output_path(Path::new("data/puzzles/mon.puz"), OutputRule::ReplaceComponent, "answers")
                .unwrap();
        assert_eq!(out, PathBuf::from("data/answers/mon.puz.txt"));
    }
}
