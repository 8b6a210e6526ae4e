use crate::error::{ClueExtractorError, Result};
use crate::extract::ClueRecord;
use csv::WriterBuilder;
use std::{fs::File, io::BufWriter, path::Path};

/// Writes clue records as `word<TAB>clue` lines, one per record, in the
/// order given. Creates the output file's parent directory if missing.
pub fn write_clues(records: &[ClueRecord], path: &Path) -> Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir).map_err(|e| ClueExtractorError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
    }

    let file = File::create(path).map_err(|e| ClueExtractorError::CreateFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut wtr = WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(BufWriter::new(file));

    for record in records {
        wtr.write_record([record.word.as_str(), record.clue.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}
