//! Brands command - inspect the brand catalog.

use clap::{Args, Subcommand};
use console::style;

use rcpt_core::brands::split_catalog_code;
use rcpt_core::validator::clean_brand_label;

/// Arguments for the brands command.
#[derive(Args)]
pub struct BrandsArgs {
    #[command(subcommand)]
    command: BrandsCommand,
}

#[derive(Subcommand)]
enum BrandsCommand {
    /// List every brand with its labels and catalog code prefixes
    List,

    /// Resolve a user-facing brand label to its canonical brand
    Resolve {
        /// Brand label (e.g. "Rayban - Sunglasses")
        label: String,
    },

    /// Resolve a catalog code to its brand
    Code {
        /// Catalog code (e.g. "RB7178")
        code: String,
    },
}

pub async fn run(args: BrandsArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let directory = config.brand_directory()?;

    match args.command {
        BrandsCommand::List => {
            for entry in directory.entries() {
                println!(
                    "{}  labels: {}  codes: {}",
                    style(&entry.brand).bold(),
                    entry.labels.join(", "),
                    entry.codes.join(", ")
                );
            }
        }
        BrandsCommand::Resolve { label } => {
            let cleaned = clean_brand_label(&label);
            match directory.brand_from_user_label(&cleaned) {
                Some(brand) => println!("{}", brand),
                None => anyhow::bail!("Unknown brand label: {}", cleaned),
            }
        }
        BrandsCommand::Code { code } => {
            let Some(parts) = split_catalog_code(&code) else {
                anyhow::bail!("Not a catalog code: {}", code);
            };
            match directory.brand_from_catalog_prefix(&parts.prefix) {
                Some(brand) => println!("{} (prefix {}, model {})", brand, parts.prefix, parts.model),
                None => anyhow::bail!("Unknown catalog prefix: {}", parts.prefix),
            }
        }
    }

    Ok(())
}
