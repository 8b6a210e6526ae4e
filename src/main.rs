use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use clue_extractor::{Config, OutputRule, gather_inputs, process_file};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Extract answer words and clue text from .puz crossword files", long_about = None)]
struct Args {
    /// Puzzle files, or a single directory containing .puz files
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// How output paths are derived from input paths
    #[arg(short, long, value_enum, default_value_t = Layout::Replace)]
    layout: Layout,
}

#[derive(ValueEnum, Clone, Copy)]
enum Layout {
    /// Replace the `puzzles` path component with the clues directory
    Replace,
    /// Write to a clues directory beside the input's parent
    Sibling,
}

impl From<Layout> for OutputRule {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::Replace => OutputRule::ReplaceComponent,
            Layout::Sibling => OutputRule::SiblingDir,
        }
    }
}

fn main() -> Result<()> {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let args = Args::parse();
    let config = Config::from_env()?;
    let rule = OutputRule::from(args.layout);

    let files = gather_inputs(&args.inputs)?;
    if files.is_empty() {
        bail!("no .puz files to process");
    }

    let mut total_clues = 0;
    for file in &files {
        let summary = process_file(file, rule, &config)
            .with_context(|| format!("while processing {}", file.display()))?;
        info!(
            "{} -> {} ({} clues)",
            file.display(),
            summary.output.display(),
            summary.clue_count
        );
        total_clues += summary.clue_count;
    }

    info!(
        "Processed {} puzzle file(s), {total_clues} clue record(s)",
        files.len()
    );
    Ok(())
}
