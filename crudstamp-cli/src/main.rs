//! crudstamp CLI: stamps CRUD router files from stencils.
//!
//! ```bash
//! crudstamp generate users orders --out routes
//! crudstamp generate invoices --template axum --stdout
//! crudstamp routes
//! ```

mod commands;
mod logger;

use clap::{Parser, Subcommand};
use crudstamp::ConfigService;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "crudstamp",
    about = "Stamp CRUD router files from stencils",
    version
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a router file for each resource name
    Generate {
        /// Resource names substituted for {controllerName}
        #[arg(required = true)]
        names: Vec<String>,

        /// Built-in template (express, axum) or path to a template file
        #[arg(short, long)]
        template: Option<String>,

        /// Directory the router files are written to
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Overwrite existing files
        #[arg(long)]
        force: bool,

        /// Print the rendered files instead of writing them
        #[arg(long)]
        stdout: bool,
    },
    /// Print the route table every stamped router serves
    Routes,
    /// List the built-in templates
    Templates,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Generate {
            names,
            template,
            out,
            force,
            stdout: to_stdout,
        } => {
            let config = ConfigService::new();
            let options = commands::generate::GenerateOptions {
                names,
                template,
                out,
                force,
                stdout: to_stdout,
            };
            commands::generate::run(&options, &config, &mut stdout)
        }
        Commands::Routes => commands::routes::run(&mut stdout),
        Commands::Templates => commands::templates::run(&mut stdout),
    }
}

fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    if let Err(e) = run(cli) {
        tracing::debug!("{:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
