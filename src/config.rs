use crate::error::{ClueExtractorError, Result};
use std::env;

const ENV_CLUES_DIR: &str = "CLUE_EXTRACTOR_CLUES_DIR";
const DEFAULT_CLUES_DIR: &str = "clues";

#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the directory clue files are written into.
    pub clues_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clues_dir: DEFAULT_CLUES_DIR.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(name) = env::var(ENV_CLUES_DIR)
            && !name.trim().is_empty()
        {
            let name = name.trim().to_string();

            // A directory name with a separator would silently change the
            // output layout; reject early.
            if name.contains(['/', '\\']) {
                return Err(ClueExtractorError::InvalidConfiguration(format!(
                    "Clues directory name must not contain a path separator: {name}"
                )));
            }
            config.clues_dir = name;
        }
        Ok(config)
    }
}
