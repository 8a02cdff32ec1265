//! raygen CLI - V binding generator for raylib

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use raygen::util::diagnostic::emit;
use raygen::BindgenError;

fn main() {
    let cli = Cli::parse();
    let color = !cli.no_color && std::io::stderr().is_terminal();

    if let Err(e) = run(cli, color) {
        match e.downcast_ref::<BindgenError>() {
            Some(err) => emit(&err.to_diagnostic(), color),
            None => eprintln!("error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli, color: bool) -> Result<()> {
    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("raygen=debug")
    } else {
        EnvFilter::new("raygen=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(color)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let config = cli.config;

    // Execute command
    match cli.command {
        Commands::Generate(args) => commands::generate::execute(args, config.as_deref(), color),
        Commands::Bind(args) => commands::bind::execute(args, config.as_deref(), color),
        Commands::Modules => commands::modules::execute(),
        Commands::MapType(args) => commands::map_type::execute(args),
        Commands::ConvertName(args) => commands::convert_name::execute(args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
