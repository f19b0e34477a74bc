mod commands;
mod config;
mod project;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    apply, check, elements, export, import, init, render, suggest, templates, ApplyArgs,
    ExportArgs, ImportArgs, InitArgs, RenderArgs, SuggestArgs,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Pagesmith CLI - edit site documents from the terminal
#[derive(Parser, Debug)]
#[command(name = "pagesmith")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Project directory
    #[arg(long, global = true, default_value = ".")]
    dir: PathBuf,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new Pagesmith project
    Init(InitArgs),

    /// List the built-in templates
    Templates,

    /// List the element types that can be added
    Elements,

    /// Dispatch a JSON file of actions against the project
    Apply(ApplyArgs),

    /// Render a page as a virtual DOM tree or markup
    Render(RenderArgs),

    /// Export the project as a downloadable JSON file
    Export(ExportArgs),

    /// Replace the project with an exported JSON file
    Import(ImportArgs),

    /// Print improvement suggestions for the project
    Suggest(SuggestArgs),

    /// Validate document invariants and element content
    Check,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let dir = cli.dir.as_path();
    let result = match cli.command {
        Command::Init(args) => init(args, dir),
        Command::Templates => templates(),
        Command::Elements => elements(),
        Command::Apply(args) => apply(args, dir),
        Command::Render(args) => render(args, dir),
        Command::Export(args) => export(args, dir),
        Command::Import(args) => import(args, dir),
        Command::Suggest(args) => suggest(args, dir),
        Command::Check => check(dir),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
