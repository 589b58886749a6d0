use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "match-watcher observation backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Import half stats for a match from a screenshot via OCR
    Import {
        /// Target match (required for the import to proceed)
        #[arg(short, long)]
        match_id: Option<i64>,
        /// Screenshot file
        image: PathBuf,
    },
    /// Import half stats for a match from pasted or recognized text
    ImportText {
        #[arg(short, long)]
        match_id: Option<i64>,
        /// Text file, as produced by recognition or pasted by hand
        file: PathBuf,
    },
    /// Import the canned demo dataset through the normal pipeline
    Demo {
        #[arg(short, long)]
        match_id: Option<i64>,
    },
    /// Dominance verdict and breakdown for one match
    Report { match_id: i64 },
    /// Season-wide totals, averages and clinicality
    Season,
    /// Recover fixture candidates from a fixture-list file
    Fixtures {
        file: PathBuf,
        /// Treat the file as an image and run it through OCR first
        #[arg(long)]
        image: bool,
    },
    /// Delete the stored observation for a match
    Reset { match_id: i64 },
}
