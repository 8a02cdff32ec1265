//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// raygen - Generate V bindings for raylib, raymath and raygui
#[derive(Parser)]
#[command(name = "raygen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to a Raygen.toml (defaults to ./Raygen.toml when present)
    #[arg(long, global = true, env = "RAYGEN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate bindings for the configured modules
    Generate(GenerateArgs),

    /// Generate bindings for a single module from an explicit description
    Bind(BindArgs),

    /// List the built-in module configurations
    Modules,

    /// Show the V type for a C type descriptor
    MapType(MapTypeArgs),

    /// Show the snake_case form of a C identifier
    ConvertName(ConvertNameArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Only generate these modules (defaults to all configured jobs)
    pub modules: Vec<String>,

    /// Skip the formatter
    #[arg(long)]
    pub no_fmt: bool,
}

#[derive(Args)]
pub struct BindArgs {
    /// Built-in module configuration (raylib, raymath, raygui)
    #[arg(short, long)]
    pub module: String,

    /// API description JSON produced by raylib_parser
    #[arg(short, long)]
    pub input: PathBuf,

    /// File to write
    #[arg(short, long)]
    pub output: PathBuf,

    /// Name for the `module` header (defaults to the module)
    #[arg(long)]
    pub name: Option<String>,

    /// Skip the formatter
    #[arg(long)]
    pub no_fmt: bool,
}

#[derive(Args)]
pub struct MapTypeArgs {
    /// C type descriptor, e.g. "const char *" or "float[4][4]"
    pub descriptor: String,

    /// Function the type belongs to (resolves variadic parameters)
    #[arg(long)]
    pub function: Option<String>,

    /// Module whose variadic overrides apply
    #[arg(long, default_value = "raylib")]
    pub module: String,
}

#[derive(Args)]
pub struct ConvertNameArgs {
    /// Identifier to convert
    pub identifier: String,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
