//! Output formatting shared by the subcommand handlers.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

/// Rendering mode selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON of the library result.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        };
        f.write_str(value)
    }
}

/// Print a library result as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render a stop sequence as `A -> B -> C`.
pub fn format_stops(stops: &[String]) -> String {
    stops.join(" -> ")
}
