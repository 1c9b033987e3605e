//! Dates command - show the renderings a claimed date is matched against.

use clap::Args;
use console::style;

use rcpt_core::dates::DateFormatExpander;

/// Arguments for the dates command.
#[derive(Args)]
pub struct DatesArgs {
    /// Claimed date
    #[arg(required = true)]
    date: String,

    /// chrono format of the date (default: from configuration)
    #[arg(short, long)]
    format: Option<String>,

    /// Only print the number of renderings
    #[arg(long)]
    count: bool,
}

pub async fn run(args: DatesArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let format = args
        .format
        .unwrap_or(config.validation.date_input_format);

    let expander = DateFormatExpander::new(format);
    let renderings = expander.expand(&args.date);

    if renderings.is_empty() {
        anyhow::bail!(
            "Date '{}' does not parse with format '{}'",
            args.date,
            expander.input_format()
        );
    }

    if args.count {
        println!("{}", renderings.len());
        return Ok(());
    }

    for rendering in &renderings {
        println!("{}", rendering);
    }
    eprintln!(
        "{} {} renderings",
        style("ℹ").blue(),
        renderings.len()
    );

    Ok(())
}
