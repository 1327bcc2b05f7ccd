use crate::OutputFormat;
use crate::format::format_duration;
use crate::options::Options;
use anyhow::{Context, Result};

/// Format one duration and print it in the selected output format.
pub fn run(milliseconds: f64, options: &Options, output: OutputFormat) -> Result<()> {
    let formatted =
        format_duration(milliseconds, options).context("Failed to format duration")?;

    match output {
        OutputFormat::Text => println!("{}", formatted),
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "milliseconds": milliseconds,
                "formatted": formatted,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }

    Ok(())
}
