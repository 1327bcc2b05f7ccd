use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use pretty_time::OutputFormat;
use pretty_time::commands;
use pretty_time::config;

#[derive(Parser)]
#[command(name = "prettytime")]
#[command(about = "Convert milliseconds into a human readable duration")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a duration given in milliseconds
    Format(FormatArgs),
    /// Inspect configuration
    Config(ConfigArgs),
}

#[derive(Args)]
struct FormatArgs {
    #[arg(
        help = "Duration in milliseconds (may be negative or fractional)",
        allow_hyphen_values = true
    )]
    milliseconds: f64,
    #[arg(long, help = "Render as clock style H:MM:SS")]
    colon_notation: bool,
    #[arg(long, help = "Show only the largest unit")]
    compact: bool,
    #[arg(long, help = "Cap the number of rendered units")]
    unit_count: Option<u32>,
    #[arg(long, help = "Decimal digits for combined seconds")]
    seconds_decimal_digits: Option<u32>,
    #[arg(long, help = "Decimal digits for combined milliseconds")]
    milliseconds_decimal_digits: Option<u32>,
    #[arg(long, help = "Keep trailing .000 on whole seconds")]
    keep_decimals_on_whole_seconds: bool,
    #[arg(long, help = "Use long unit names (e.g. '1 hour 7 minutes')")]
    verbose: bool,
    #[arg(long, help = "Keep milliseconds out of the seconds fraction")]
    separate_milliseconds: bool,
    #[arg(long, help = "Split the remainder into microseconds and nanoseconds")]
    format_sub_milliseconds: bool,
    #[arg(long, value_enum, default_value = "text", help = "Output format")]
    output: OutputFormat,
}

#[derive(Parser)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Get { key: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Missing config file is normal; fall back to defaults
    let config = config::load().unwrap_or_default();

    match &cli.command {
        Commands::Format(args) => {
            let options = resolve_options(&config.format, args);
            commands::format::run(args.milliseconds, &options, args.output)?;
        }
        Commands::Config(args) => match &args.action {
            ConfigAction::List => commands::config::list(&config)?,
            ConfigAction::Get { key } => commands::config::get(key, &config)?,
        },
    }

    Ok(())
}

/// Layer CLI flags over the config-file defaults.
fn resolve_options(defaults: &pretty_time::Options, args: &FormatArgs) -> pretty_time::Options {
    let mut options = defaults.clone();

    options.colon_notation |= args.colon_notation;
    options.compact |= args.compact;
    options.keep_decimals_on_whole_seconds |= args.keep_decimals_on_whole_seconds;
    options.verbose |= args.verbose;
    options.separate_milliseconds |= args.separate_milliseconds;
    options.format_sub_milliseconds |= args.format_sub_milliseconds;

    if let Some(count) = args.unit_count {
        options.unit_count = Some(count);
    }
    if let Some(digits) = args.seconds_decimal_digits {
        options.seconds_decimal_digits = digits;
    }
    if let Some(digits) = args.milliseconds_decimal_digits {
        options.milliseconds_decimal_digits = digits;
    }

    options
}
