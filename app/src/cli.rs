//! Command-line arguments for the headless host

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "resume-builder",
    version,
    about = "Resume builder - edit over JSON lines on stdin, export to PDF",
    long_about = "Reads one JSON command per line on stdin and answers with one JSON \
                  response per line on stdout.\n\n\
                  Exports run in the background; their result arrives as a later \
                  exportFinished line."
)]
pub struct Cli {
    /// Directory holding settings.json
    #[arg(value_name = "DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Export the sample resume once and exit instead of reading commands
    #[arg(long = "export")]
    pub export_once: bool,
}
