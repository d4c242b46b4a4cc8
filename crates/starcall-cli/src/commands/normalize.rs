//! Normalize command - show dialog text after OCR repairs.

use std::path::PathBuf;

use clap::Args;

use starcall_core::StarCallParser;

use super::{load_config, read_input};

/// Arguments for the normalize command.
#[derive(Args)]
pub struct NormalizeArgs {
    /// Dialog text file (default: stdin)
    input: Option<PathBuf>,
}

pub fn run(args: NormalizeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let text = read_input(args.input.as_deref())?;

    let parser = StarCallParser::from_config(&config);
    println!("{}", parser.normalize(&text));

    Ok(())
}
