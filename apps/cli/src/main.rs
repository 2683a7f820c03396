//! ResumeParser CLI — turn PDF and DOCX resumes into structured JSON.
//!
//! Extracts text, detects the language, and applies that language's pattern
//! bundle to fill the canonical resume record.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
