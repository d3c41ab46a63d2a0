mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    context::init_tracing(cli.verbose);

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Vars { template, json } => commands::vars::run(&template, json, config),
        Commands::Fill {
            template,
            values,
            edit,
            out,
        } => commands::fill::run(&template, &values, edit, out.as_deref(), config),
        Commands::Export {
            template,
            bitmap,
            values,
            edit,
            out_dir,
            json,
        } => commands::export::run(&template, &bitmap, &values, edit, &out_dir, json, config),
        Commands::Plan {
            width,
            height,
            json,
        } => commands::plan::run(width, height, json, config),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
