//! CLI command structure using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "minuta")]
#[command(version, about = "Fill certificate templates and export them as paginated PDFs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to ./minuta.toml when present)
    #[arg(long, global = true, env = "MINUTA_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the placeholders of a template
    Vars {
        /// HTML template
        template: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Substitute values into a template and write the HTML
    Fill {
        /// HTML template
        template: PathBuf,

        #[command(flatten)]
        values: ValueArgs,

        /// Revise the generated document in an external editor first
        #[arg(long)]
        edit: bool,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Fill a template and export it as a paginated PDF
    Export {
        /// HTML template
        template: PathBuf,

        /// Capture of the filled document (PNG or JPEG) from an external renderer
        #[arg(long)]
        bitmap: PathBuf,

        #[command(flatten)]
        values: ValueArgs,

        /// Revise the generated document in an external editor first
        #[arg(long)]
        edit: bool,

        /// Directory the PDF is written to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how a capture of the given size is split into pages
    Plan {
        /// Capture width in pixels
        #[arg(long)]
        width: u32,

        /// Capture height in pixels
        #[arg(long)]
        height: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Where placeholder values come from, applied in this order
#[derive(Args, Debug, Default)]
pub struct ValueArgs {
    /// Fill every placeholder with synthetic data
    #[arg(long)]
    pub autofill: bool,

    /// Seed for --autofill
    #[arg(long, requires = "autofill")]
    pub seed: Option<u64>,

    /// Record id to look up in --records
    #[arg(long, requires = "records")]
    pub record: Option<String>,

    /// JSON record store
    #[arg(long, requires = "record")]
    pub records: Option<PathBuf>,

    /// TOML file with `name = "value"` pairs
    #[arg(long)]
    pub values: Option<PathBuf>,

    /// Set a single value (repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(String, String)>,
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", raw))?;
    if name.is_empty() {
        return Err(format!("missing placeholder name in '{}'", raw));
    }
    Ok((name.to_string(), value.to_string()))
}
