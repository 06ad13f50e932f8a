//! ircmark CLI - render, strip and preview `$(name)` markup.
//!
//! Provides commands for:
//! - `render`: turn markup into IRC control codes (or an ANSI preview)
//! - `strip`: remove markup, optionally control codes too
//! - `colors` / `formats`: list the available names
//! - `lookup`: print the code for one name

mod commands;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::{Style, Term};
use tracing_subscriber::EnvFilter;

use commands::{LookupArgs, RenderArgs, StripArgs};

/// Inline `$(name)` styling markup for IRC text.
#[derive(Parser)]
#[command(name = "ircmark", version, about)]
struct Cli {
    /// YAML palette replacing the built-in colors and formats.
    #[arg(long, global = true, env = "IRCMARK_PALETTE", value_name = "FILE")]
    palette: Option<PathBuf>,

    /// Log at debug level (otherwise RUST_LOG, default warn).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render markup to IRC control codes.
    Render(RenderArgs),
    /// Remove markup from text.
    Strip(StripArgs),
    /// List color names and codes.
    Colors,
    /// List format names and codes.
    Formats,
    /// Print the code for a single color or format.
    Lookup(LookupArgs),
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli) {
        let red = Style::new().red();
        let _ = Term::stderr().write_line(&red.apply_to(format!("Error: {err:#}")).to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let output = execute(cli.command, cli.palette.as_deref())?;
    Term::stdout().write_line(&output)?;
    Ok(())
}

/// Runs one command. The palette is only loaded by commands that look names up.
fn execute(command: Commands, palette: Option<&Path>) -> anyhow::Result<String> {
    let registry = || commands::load_registry(palette);
    Ok(match command {
        Commands::Render(args) => commands::render(&registry()?, args)?,
        Commands::Strip(args) => commands::strip(args)?,
        Commands::Colors => commands::list_colors(&registry()?),
        Commands::Formats => commands::list_formats(&registry()?),
        Commands::Lookup(args) => commands::lookup(&registry()?, &args)?,
    })
}
