//! Parse command - build a /call command from one dialog.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::{debug, info};

use starcall_core::{CallCommand, ExtractionResult, StarCallParser};

use super::{load_config, read_input};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Dialog text file (default: stdin)
    input: Option<PathBuf>,

    /// World the star was seen on
    #[arg(short, long)]
    world: Option<u16>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "command")]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fail when any field could not be extracted
    #[arg(long)]
    strict: bool,

    /// Print the normalized text to stderr
    #[arg(long)]
    show_cleaned: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// The /call command only
    Command,
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

/// JSON rendering of a parsed dialog.
#[derive(Serialize)]
struct ParseOutput<'a> {
    world: Option<u16>,
    region: &'a str,
    size: String,
    relative_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<String>,
    cleaned_text: &'a str,
    confidence: f32,
    warnings: &'a [String],
}

pub fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let text = read_input(args.input.as_deref())?;

    if text.trim().is_empty() {
        anyhow::bail!("No dialog text given");
    }

    let parser = StarCallParser::from_config(&config);
    let result = parser.parse(&text);

    if args.show_cleaned {
        eprintln!("{} {}", style("Cleaned:").blue(), result.cleaned_text);
    }

    if args.strict || config.extraction.strict {
        if let Err(e) = result.fields.require_complete() {
            anyhow::bail!("{} in: {}", e, result.cleaned_text);
        }
    }

    for warning in &result.warnings {
        eprintln!("{} {}", style("⚠").yellow(), warning);
    }

    let world = args.world.or(config.command.default_world);
    let output = format_result(&result, world, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    info!("Parsed dialog in {}ms", result.processing_time_ms);

    Ok(())
}

fn format_result(
    result: &ExtractionResult,
    world: Option<u16>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let command = world.map(|w| CallCommand::new(w, result.fields.clone()).to_string());
    debug!("Call command: {:?}", command);

    match format {
        OutputFormat::Command => match command {
            Some(command) => Ok(command),
            None => anyhow::bail!(
                "No world given. Pass --world or set command.default_world in the config."
            ),
        },
        OutputFormat::Json => format_json(result, world, command),
        OutputFormat::Csv => format_csv(result, world),
        OutputFormat::Text => Ok(format_text(result, command)),
    }
}

fn format_json(
    result: &ExtractionResult,
    world: Option<u16>,
    command: Option<String>,
) -> anyhow::Result<String> {
    let output = ParseOutput {
        world,
        region: result.fields.location_or_sentinel(),
        size: result.fields.size_or_sentinel(),
        relative_time: result.fields.time_or_sentinel(),
        command,
        cleaned_text: &result.cleaned_text,
        confidence: result.confidence,
        warnings: &result.warnings,
    };

    Ok(serde_json::to_string_pretty(&output)?)
}

fn format_csv(result: &ExtractionResult, world: Option<u16>) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let world = world.map(|w| w.to_string()).unwrap_or_default();
    let size = result.fields.size_or_sentinel();
    let time = result.fields.time_or_sentinel();

    wtr.write_record(["world", "region", "size", "relative_time"])?;
    wtr.write_record([
        world.as_str(),
        result.fields.location_or_sentinel(),
        size.as_str(),
        time.as_str(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(result: &ExtractionResult, command: Option<String>) -> String {
    let fields = &result.fields;
    let mut output = String::new();

    output.push_str(&format!("Region: {}\n", fields.location_or_sentinel()));
    output.push_str(&format!("Size:   {}\n", fields.size_or_sentinel()));
    output.push_str(&format!("Time:   {} minutes\n", fields.time_or_sentinel()));

    if let Some(command) = command {
        output.push_str(&format!("\n{}\n", command));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExtractionResult {
        StarCallParser::new().parse(
            "The star looks like it will land in Misthalin in the next 12 to 14 minutes. \
             The star looks to be size 6,",
        )
    }

    #[test]
    fn test_command_format_needs_world() {
        assert!(format_result(&sample(), None, OutputFormat::Command).is_err());
        assert_eq!(
            format_result(&sample(), Some(5), OutputFormat::Command).unwrap(),
            "/call world: 5 region: Misthalin size: 6 relative-time: 12"
        );
    }

    #[test]
    fn test_csv_format() {
        let csv = format_result(&sample(), Some(5), OutputFormat::Csv).unwrap();
        assert_eq!(csv, "world,region,size,relative_time\n5,Misthalin,6,12\n");
    }

    #[test]
    fn test_json_format() {
        let json = format_result(&sample(), None, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["region"], "Misthalin");
        assert_eq!(value["size"], "6");
        assert_eq!(value["relative_time"], "12");
        assert!(value.get("command").is_none());
    }

    #[test]
    fn test_text_format() {
        let text = format_result(&sample(), Some(5), OutputFormat::Text).unwrap();
        assert!(text.starts_with("Region: Misthalin\n"));
        assert!(text.contains("/call world: 5"));
    }
}
