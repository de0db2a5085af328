//! CLI command definitions

use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "trainplan")]
#[command(
    about = "Validate a training plan document and render summary, detailed and HTML reports",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Training plan XML document
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Config file (default: trainplan.toml in the current directory, if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory the reports are written to
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Summary report file name
    #[arg(long, value_name = "FILE")]
    pub summary: Option<PathBuf>,

    /// Detailed text report file name
    #[arg(long, value_name = "FILE")]
    pub detail: Option<PathBuf>,

    /// HTML report file name
    #[arg(long, value_name = "FILE")]
    pub html: Option<PathBuf>,

    /// Only validate the document, write nothing
    #[arg(long)]
    pub check: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
